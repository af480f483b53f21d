//! Traits describing the element types that collections can sort and do arithmetic over.

mod order;
#[cfg(feature = "numeric")]
mod number;

pub use order::*;
#[cfg(feature = "numeric")]
pub use number::*;
