//! A module containing [`Buffer`], the owned backing storage for [`DynArray`](super::DynArray).
//!
//! [`Buffer`] is also re-exported under the parent module.

mod buffer;

pub use buffer::*;
