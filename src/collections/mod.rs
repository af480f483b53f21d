//! General-purpose collection types, and the traits their elements implement.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality, such as borrowed iteration, reversal
//! and searching.

pub mod contiguous;
pub mod traits;
