//! A growable array with manual capacity management, written as a value type with strong
//! guarantees about ownership and bounds.
//!
//! # Purpose
//! This crate provides [`DynArray`](collections::contiguous::DynArray), a contiguous sequence that
//! tracks its logical length separately from its allocated capacity, grows geometrically when full,
//! checks every index it is given and deep-copies on clone. Alongside it are the small helpers that
//! programs reach for when working with a list of numbers: summing, averaging, sorting either way
//! and printing as `{1, 2, 3}`.
//!
//! # Method
//! The storage is a [`Buffer`](collections::contiguous::Buffer): a boxed slice of
//! [`MaybeUninit`](std::mem::MaybeUninit) slots, so that the allocation is released whenever its
//! owner is, including during unwinding. The DynArray is responsible for knowing which of those
//! slots are live, and for dropping exactly those. Reallocation moves the live values into a fresh
//! Buffer rather than copying them, so no value is ever duplicated or dropped twice.
//!
//! # Error Handling
//! Checked operations return [`Result`]s with small, strongly typed errors, each of which
//! implements [`Error`](std::error::Error), and which can be combined into
//! [`DynArrayError`](collections::contiguous::DynArrayError) with `?`. Operations that mirror
//! [`Vec`] (`insert`, `remove` and `[]` indexing) panic instead, with the same messages. Running out
//! of memory aborts, as it does for the rest of `std`.
//!
//! Indices passed to the checked accessors are signed, so that a negative index is reported as out
//! of bounds instead of wrapping around.
//!
//! # Features
//! - `numeric` (default): Enables [`Number`](collections::traits::Number) along with
//!   [`sum`](collections::contiguous::DynArray::sum) and
//!   [`average`](collections::contiguous::DynArray::average).
//!
//! # Logging
//! Reallocations and assignments are reported through [`tracing`] at the `TRACE` level. Nothing is
//! logged unless a subscriber is installed.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
