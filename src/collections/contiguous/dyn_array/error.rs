use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An error returned when an index lies outside of the live elements of a collection. Negative
/// indices are representable so that they can be reported rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: isize,
    /// The number of live elements at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An error returned when a collection is requested with a negative length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Can't construct a DynArray with negative length {len}!")]
pub struct NegativeLength {
    /// The length that was requested.
    pub len: isize,
}

/// An error returned when averaging a collection with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Can't average a collection with 0 elements!")]
pub struct EmptyAverage;

/// Any of the errors that a [`DynArray`](super::DynArray) can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum DynArrayError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`NegativeLength`].
    NegativeLength(NegativeLength),
    /// See [`EmptyAverage`].
    EmptyAverage(EmptyAverage),
}
