use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::slice;

use tracing::trace;

/// A fixed number of owned, possibly uninitialized slots of `T`, allocated contiguously on the
/// heap. Similar to a [`Box<[MaybeUninit<T>]>`](Box<T>), which is what it wraps.
///
/// A Buffer doesn't track which of its slots are initialized, that is the responsibility of the
/// owner. As a result, dropping a Buffer releases the allocation but never drops any values stored
/// in it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the Buffer.
/// - `l`: The number of live slots moved during reallocation.
///
/// | Method | Complexity |
/// |-|-|
/// | `new_uninit` | `O(1)` |
/// | `size` | `O(1)` |
/// | `write` | `O(1)` |
/// | `take` | `O(1)` |
/// | `realloc` | `O(l)` |
pub struct Buffer<T> {
    pub(crate) slots: Box<[MaybeUninit<T>]>,
}

impl<T> Buffer<T> {
    /// Creates a new Buffer with `size` uninitialized slots. Nothing is allocated if `size` is
    /// zero or `T` is zero-sized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::Buffer;
    /// let buf: Buffer<u8> = Buffer::new_uninit(5);
    /// assert_eq!(buf.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Buffer<T> {
        Buffer {
            slots: Box::new_uninit_slice(size),
        }
    }

    /// Returns the number of slots in the Buffer, initialized or not.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` into the slot at `index`, without dropping any value that might have been
    /// there previously.
    ///
    /// # Panics
    /// Panics if `index >= self.size()`.
    pub fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    /// Moves the value out of the slot at `index`, leaving the slot uninitialized.
    ///
    /// # Safety
    /// The slot at `index` must be initialized. After this call, it must be treated as
    /// uninitialized by the caller.
    ///
    /// # Panics
    /// Panics if `index >= self.size()`.
    pub unsafe fn take(&mut self, index: usize) -> T {
        let slot = mem::replace(&mut self.slots[index], MaybeUninit::uninit());
        // SAFETY: The caller guarantees that the slot was initialized.
        unsafe { slot.assume_init() }
    }

    /// Replaces the allocation with a new one of `new_size` slots, moving the first `live` slots
    /// across in order. The old allocation is released afterwards, without dropping anything.
    ///
    /// Values are moved rather than copied, so any initialized slots beyond `live` are leaked
    /// rather than dropped. Callers are expected to drop those first.
    ///
    /// # Panics
    /// Panics if `live` exceeds either the current or the new size, or if the new memory layout
    /// size exceeds [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize, live: usize) {
        assert!(
            live <= new_size && live <= self.size(),
            "can't move {} live slots from a buffer of {} into a buffer of {}",
            live,
            self.size(),
            new_size
        );

        trace!(old_size = self.size(), new_size, live, "reallocating buffer");

        let mut slots = Box::new_uninit_slice(new_size);
        for (new, old) in slots.iter_mut().zip(self.slots[..live].iter_mut()) {
            *new = mem::replace(old, MaybeUninit::uninit());
        }

        // The old box only holds MaybeUninit values, so replacing it releases the memory and
        // nothing else.
        self.slots = slots;
    }

    /// Views the first `len` slots as a slice of initialized values.
    ///
    /// # Safety
    /// The first `len` slots must all be initialized.
    ///
    /// # Panics
    /// Panics if `len > self.size()`.
    pub unsafe fn init_prefix(&self, len: usize) -> &[T] {
        let prefix = &self.slots[..len];
        // SAFETY: MaybeUninit<T> has the same layout as T and the caller guarantees that every
        // slot in the prefix is initialized. The borrow is tied to &self.
        unsafe { slice::from_raw_parts(prefix.as_ptr().cast::<T>(), prefix.len()) }
    }

    /// Views the first `len` slots as a mutable slice of initialized values.
    ///
    /// # Safety
    /// The first `len` slots must all be initialized.
    ///
    /// # Panics
    /// Panics if `len > self.size()`.
    pub unsafe fn init_prefix_mut(&mut self, len: usize) -> &mut [T] {
        let prefix = &mut self.slots[..len];
        // SAFETY: MaybeUninit<T> has the same layout as T and the caller guarantees that every
        // slot in the prefix is initialized. The borrow is tied to &mut self, so it is unique.
        unsafe { slice::from_raw_parts_mut(prefix.as_mut_ptr().cast::<T>(), prefix.len()) }
    }
}

impl<T> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
