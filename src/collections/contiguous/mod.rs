//! Contiguous collection types. Namely [`DynArray`] for a growable sequence with value semantics,
//! and the [`Buffer`] that backs it.
#![warn(missing_docs)]

pub mod buffer;
pub mod dyn_array;

#[doc(inline)]
pub use buffer::Buffer;
#[doc(inline)]
pub use dyn_array::{DynArray, DynArrayError, DEFAULT_CAP, GROWTH_FACTOR, MIN_CAP, SPARE_CAP};
