use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use super::error::{IndexOutOfBounds, NegativeLength};
#[cfg(feature = "numeric")]
use super::error::EmptyAverage;
use crate::collections::contiguous::Buffer;
#[cfg(feature = "numeric")]
use crate::collections::traits::Number;
use crate::collections::traits::TotalOrder;
use crate::util::result::ResultExtension;

/// The capacity of a DynArray created with [`DynArray::new`].
pub const DEFAULT_CAP: usize = 10;
/// The smallest capacity that any DynArray will have.
pub const MIN_CAP: usize = 1;
/// The factor that capacity is multiplied by when a full DynArray grows.
pub const GROWTH_FACTOR: usize = 2;
/// Additional capacity reserved past the required length by [`DynArray::filled`] and
/// [`DynArray::assign`], to allow for a few pushes without reallocation.
pub const SPARE_CAP: usize = 10;

/// A growable contiguous collection with value semantics, based on a [`Buffer<T>`].
///
/// The DynArray owns its Buffer exclusively, the first `len` slots of which are live. Cloning
/// always allocates a new Buffer, so no two DynArrays ever share storage.
///
/// Unlike [`Vec`], an empty DynArray still holds an allocation of at least [`MIN_CAP`] slots
/// (unless `T` is zero-sized), and checked accessors take signed indices so that negative indices
/// are reported as errors instead of being wrapped or rejected by the type system.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the other DynArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`*, `O(n)` |
/// | `remove` | `O(n-i)` |
/// | `clear` | `O(n)` |
/// | `assign` | `O(n+m)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `sort_ascending` | `O(n log n)` |
/// | `sort_descending` | `O(n log n)` |
/// | `sum` | `O(n)` |
/// | `average` | `O(n)` |
///
/// \* If the DynArray doesn't have enough capacity for the new element, it grows first, which
/// takes `O(n)`.
///
/// \** If the DynArray has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct DynArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Creates a new, empty DynArray with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::{DynArray, DEFAULT_CAP};
    /// let arr: DynArray<i32> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> DynArray<T> {
        DynArray::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty DynArray with capacity for `cap` elements, or [`MIN_CAP`] if `cap` is
    /// smaller.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr: DynArray<u8> = DynArray::with_cap(3);
    /// assert_eq!(arr.cap(), 3);
    /// arr.extend([1, 2, 3]);
    /// assert_eq!(arr.cap(), 3);
    ///
    /// assert_eq!(DynArray::<u8>::with_cap(0).cap(), 1);
    /// ```
    pub fn with_cap(cap: usize) -> DynArray<T> {
        DynArray {
            buf: Buffer::new_uninit(cmp::max(cap, MIN_CAP)),
            len: 0,
        }
    }

    /// Returns the number of live elements in the DynArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// assert!(arr.is_empty());
    /// arr.push(1);
    /// assert!(!arr.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the DynArray can hold before it needs to reallocate.
    pub fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is negative or not less than the length.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let arr = DynArray::from([4, 5, 6]);
    /// assert_eq!(arr.get(1), Ok(&5));
    /// assert!(arr.get(3).is_err());
    /// assert!(arr.get(-1).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, IndexOutOfBounds> {
        let index = self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is negative or not less than the length.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfBounds> {
        let index = self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Replaces the element at `index` with `value`, returning the old value. No other element is
    /// touched.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is negative or not less than the length, in which
    /// case the DynArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::filled(3, 0).unwrap();
    /// assert_eq!(arr.set(1, 9), Ok(0));
    /// assert_eq!(&*arr, &[0, 9, 0]);
    /// ```
    pub fn set(&mut self, index: isize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Push the provided value onto the end of the DynArray, growing the capacity by
    /// [`GROWTH_FACTOR`] first if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynArray would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::with_cap(1);
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf.write(self.len, value);
        self.len += 1;
    }

    /// Pops the last value off the end of the DynArray, returning it if there was one. The
    /// capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr: DynArray<_> = (0..3).collect();
    /// assert_eq!(arr.pop(), Some(2));
    /// assert_eq!(arr.pop(), Some(1));
    /// assert_eq!(arr.pop(), Some(0));
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before taking, so the slot is never considered live afterwards.
            self.len -= 1;
            // SAFETY: The slot at the old len - 1 was live and is no longer counted as such.
            Some(unsafe { self.buf.take(self.len) })
        }
    }

    /// Inserts the provided value at the given index, moving all following values back by one and
    /// growing if necessary. An index equal to the length pushes onto the end.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([0, 1, 2]);
    /// arr.insert(1, 100);
    /// arr.insert(4, 200);
    /// assert_eq!(&*arr, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(self.out_of_bounds(index)).throw()
        }

        self.push(value);
        self[index..].rotate_right(1);
    }

    /// Removes the element at the provided index, moving all following values forward to fill in
    /// the gap.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr: DynArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            Err(self.out_of_bounds(index)).throw()
        }

        self[index..].rotate_left(1);
        // The removed value is now last.
        self.pop().expect("a checked index implies a non-empty DynArray")
    }

    /// Drops all elements, leaving the DynArray empty but with its capacity unchanged.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// let cap = arr.cap();
    /// arr.clear();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), cap);
    /// ```
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Ensures that the DynArray has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a [`usize`] or the memory layout of the DynArray
    /// would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).expect("Capacity overflow!");

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the DynArray so that its capacity is equal to its length, or [`MIN_CAP`] if the
    /// length is smaller.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(cmp::max(self.len, MIN_CAP));
    }

    /// Sorts the DynArray from smallest to biggest according to [`TotalOrder`]. The sort is not
    /// stable.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([5, 3, 7, 1]);
    /// arr.sort_ascending();
    /// assert_eq!(&*arr, &[1, 3, 5, 7]);
    /// ```
    pub fn sort_ascending(&mut self)
    where
        T: TotalOrder,
    {
        self.sort_unstable_by(|a, b| a.total_order(b));
    }

    /// Sorts the DynArray from biggest to smallest, by sorting it ascending and then reversing it
    /// in place.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([5.0, 3.5, 7.25, 1.0]);
    /// arr.sort_descending();
    /// assert_eq!(&*arr, &[7.25, 5.0, 3.5, 1.0]);
    /// ```
    pub fn sort_descending(&mut self)
    where
        T: TotalOrder,
    {
        self.sort_ascending();
        self.reverse();
    }

    /// Converts the provided index into a `usize` if it refers to a live element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is negative or not less than the length.
    pub(crate) fn check_index(&self, index: isize) -> Result<usize, IndexOutOfBounds> {
        match usize::try_from(index) {
            Ok(checked) if checked < self.len => Ok(checked),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Builds the error for an unsigned index that isn't valid. Indices too large for an
    /// [`isize`] are reported as [`isize::MAX`].
    pub(crate) fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len: self.len,
        }
    }

    /// Reallocates the internal Buffer with the provided capacity, moving all live elements.
    ///
    /// # Panics
    /// Panics if `new_cap < len`, or the memory layout of the DynArray would have a size that
    /// exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap == self.cap() { return; }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "resizing DynArray");
        self.buf.realloc(new_cap, self.len);
    }

    /// Grows the internal Buffer to allow for the insertion of additional elements. After calling
    /// this, the DynArray can take at least one more element.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a [`usize`] or the memory layout of the DynArray would
    /// have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).expect("Capacity overflow!");

        self.realloc_with_cap(cmp::max(new_cap, MIN_CAP));
    }
}

impl<T: Clone> DynArray<T> {
    /// Creates a DynArray containing `len` clones of `value`, with [`SPARE_CAP`] additional
    /// capacity.
    ///
    /// # Errors
    /// Returns [`NegativeLength`] if `len` is negative.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::{DynArray, SPARE_CAP};
    /// let arr = DynArray::filled(3, 'x').unwrap();
    /// assert_eq!(&*arr, &['x', 'x', 'x']);
    /// assert_eq!(arr.cap(), 3 + SPARE_CAP);
    ///
    /// assert!(DynArray::filled(-1, 'x').is_err());
    /// ```
    pub fn filled(len: isize, value: T) -> Result<DynArray<T>, NegativeLength> {
        let len = usize::try_from(len).map_err(|_| NegativeLength { len })?;

        let mut arr = DynArray::with_cap(len + SPARE_CAP);
        for _ in 0..len {
            arr.push(value.clone());
        }

        Ok(arr)
    }

    /// Replaces the contents of self with clones of the elements of `other`. The existing Buffer is
    /// reused if it is large enough, otherwise it is replaced with one that has room for the
    /// elements of `other` and [`SPARE_CAP`] more.
    ///
    /// All clones are made before self is touched, so if cloning panics self keeps its old
    /// contents.
    ///
    /// Assigning a DynArray to itself can't be expressed, because `other` can't alias `self`.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let mut a = DynArray::from([1, 2]);
    /// let b = DynArray::from([3, 4, 5]);
    /// a.assign(&b);
    /// assert_eq!(a, b);
    /// ```
    pub fn assign(&mut self, other: &DynArray<T>) {
        trace!(len = self.len, other_len = other.len, "assigning DynArray");

        let reuse = self.cap() >= other.len;
        let mut copy = DynArray::with_cap(if reuse { other.len } else { other.len + SPARE_CAP });
        for value in other.iter() {
            copy.push(value.clone());
        }

        if reuse {
            self.clear();
            // Fits without reallocating, and moving values can't panic.
            self.extend(copy);
        } else {
            mem::swap(self, &mut copy);
        }
    }
}

#[cfg(feature = "numeric")]
impl<T: Number> DynArray<T> {
    /// Returns the sum of all elements, or [`Number::ZERO`] if there are none.
    ///
    /// # Panics
    /// Panics on integer overflow when overflow checks are enabled. See
    /// [`checked_sum`](DynArray::checked_sum) for a version that doesn't.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// let arr = DynArray::from([5, 3, 7, 1]);
    /// assert_eq!(arr.sum(), 16);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().fold(T::ZERO, |acc, value| acc + *value)
    }

    /// Returns the sum of all elements, or [`None`] if an intermediate sum overflows.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// assert_eq!(DynArray::from([5, 3, 7, 1]).checked_sum(), Some(16));
    /// assert_eq!(DynArray::from([i64::MAX, 1]).checked_sum(), None);
    /// ```
    pub fn checked_sum(&self) -> Option<T> {
        self.iter().try_fold(T::ZERO, |acc, value| acc.checked_add(*value))
    }

    /// Returns the mean of all elements as an [`f64`]. Elements are accumulated as [`f64`]s, so
    /// this never overflows.
    ///
    /// # Errors
    /// Returns [`EmptyAverage`] if the DynArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::DynArray;
    /// assert_eq!(DynArray::from([5, 3, 7, 1]).average(), Ok(4.0));
    /// assert!(DynArray::<f64>::new().average().is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Result<f64, EmptyAverage> {
        if self.is_empty() {
            return Err(EmptyAverage);
        }

        let total: f64 = self.iter().map(|value| value.as_f64()).sum();
        Ok(total / self.len as f64)
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // Drop all live values in place. The Buffer then releases its allocation without touching
        // any slots.
        // SAFETY: All values less than len are initialized, and are never accessed again.
        unsafe { std::ptr::drop_in_place(self.buf.init_prefix_mut(self.len)) }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: All values less than len are initialized.
        unsafe { self.buf.init_prefix(self.len) }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: All values less than len are initialized.
        unsafe { self.buf.init_prefix_mut(self.len) }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
