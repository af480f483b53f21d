//! A module containing [`DynArray`] and associated types.
//!
//! Other included types are [`IntoIter`] for owned iteration over a DynArray, and the errors its
//! checked operations report. [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from
//! [`std::slice`] are used for borrowed iteration.
//!
//! [`DynArray`] is also re-exported under the parent module.

mod dyn_array;
mod error;
mod iter;
mod tests;

pub use dyn_array::*;
pub use error::*;
pub use iter::*;
