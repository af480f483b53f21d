#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: DynArray<i32> = DynArray::new();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), DEFAULT_CAP, "New arrays should have the default capacity.");

    let arr = DynArray::filled(3, 0).unwrap();
    assert_eq!(&*arr, &[0, 0, 0]);
    assert_eq!(arr.cap(), 3 + SPARE_CAP);

    let arr = DynArray::filled(0, 1.5).unwrap();
    assert!(arr.is_empty());
    assert!(arr.cap() >= MIN_CAP, "Even an empty array should own some capacity.");

    assert_eq!(
        DynArray::filled(-1, 0),
        Err(NegativeLength { len: -1 }),
        "A negative length should be rejected."
    );
    assert_eq!(
        DynArray::filled(-1, 0).unwrap_err().to_string(),
        "Can't construct a DynArray with negative length -1!"
    );

    assert_eq!(DynArray::<u8>::with_cap(0).cap(), MIN_CAP);
}

#[test]
fn test_push_and_growth() {
    let mut arr = DynArray::with_cap(1);
    let mut caps = vec![arr.cap()];

    for i in 0..100 {
        arr.push(i);
        assert!(arr.len() <= arr.cap());
        if *caps.last().unwrap() != arr.cap() {
            caps.push(arr.cap());
        }
    }

    assert_eq!(arr.len(), 100);
    assert!(
        arr.iter().copied().eq(0..100),
        "All pushed values should be retained in order through growth."
    );
    assert_eq!(
        caps,
        [1, 2, 4, 8, 16, 32, 64, 128],
        "Capacity should grow geometrically."
    );
}

#[test]
fn test_get_and_set() {
    let mut arr = DynArray::filled(3, 0).unwrap();
    assert_eq!(arr.set(1, 9), Ok(0));
    assert_eq!(&*arr, &[0, 9, 0], "set should only mutate the requested slot.");
    assert_eq!(arr.get(1), Ok(&9));

    *arr.get_mut(2).unwrap() = 4;
    assert_eq!(arr.get(2), Ok(&4));

    for index in [-1, 3, isize::MIN, isize::MAX] {
        let error = IndexOutOfBounds { index, len: 3 };
        assert_eq!(arr.get(index), Err(error));
        assert_eq!(arr.set(index, 7), Err(error));
        assert_eq!(arr.get_mut(index), Err(error));
    }
    assert_eq!(&*arr, &[0, 9, 4], "Failed sets shouldn't change anything.");

    assert_eq!(
        arr.get(3).unwrap_err().to_string(),
        "Index 3 out of bounds for collection with 3 elements!"
    );

    assert_panics!({
        let arr = DynArray::from([1, 2, 3]);
        let _ = arr[3];
    }, "Indexing past the end should panic.");
}

#[test]
fn test_insert_and_remove() {
    let mut arr = DynArray::with_cap(2);
    arr.insert(0, 'b');
    arr.insert(0, 'a');
    arr.insert(2, 'd');
    arr.insert(2, 'c');
    assert_eq!(&*arr, &['a', 'b', 'c', 'd']);

    assert_eq!(arr.remove(0), 'a');
    assert_eq!(arr.remove(2), 'd');
    assert_eq!(&*arr, &['b', 'c']);

    assert_panics!({
        let mut arr = DynArray::from([1, 2]);
        arr.insert(3, 0);
    }, "Inserting past the end should panic.");

    assert_panics!({
        let mut arr = DynArray::from([1, 2]);
        arr.remove(2);
    }, "Removing past the end should panic.");
}

#[test]
fn test_copy_independence() {
    let a = DynArray::from([1, 2, 3]);
    let mut b = a.clone();

    assert_eq!(a, b, "A copy should equal the original.");
    assert_eq!(b.cap(), a.cap(), "A copy should have the same capacity.");
    assert_ne!(a.as_ptr(), b.as_ptr(), "A copy should own a separate buffer.");

    b.push(4);
    b.set(0, 100).unwrap();

    assert_eq!(&*a, &[1, 2, 3], "Mutating a copy shouldn't affect the original.");
    assert_eq!(&*b, &[100, 2, 3, 4]);
}

#[test]
fn test_assign() {
    let mut a = DynArray::from([1, 2]);
    let b: DynArray<_> = (0..30).collect();

    a.assign(&b);
    assert_eq!(a, b);
    assert_eq!(a.cap(), 30 + SPARE_CAP, "A small array should grow to fit with spare room.");

    let small = DynArray::from([7]);
    a.assign(&small);
    assert_eq!(a, small);
    assert_eq!(a.cap(), 30 + SPARE_CAP, "A large enough buffer should be reused.");

    let mut c = DynArray::new();
    c.clone_from(&b);
    assert_eq!(c, b, "clone_from should behave as assign.");
}

#[test]
fn test_self_assignment_is_unchanged() {
    let mut a = DynArray::from([3, 1, 2]);
    let cap = a.cap();

    let snapshot = a.clone();
    a.assign(&snapshot);
    a.clone_from(&a.clone());

    assert_eq!(&*a, &[3, 1, 2]);
    assert_eq!(a.cap(), cap);
}

/// Clones fine unless it holds [`FailingClone::POISON`].
#[derive(Debug, PartialEq)]
struct FailingClone(u8);

impl FailingClone {
    const POISON: u8 = 0;
}

impl Clone for FailingClone {
    fn clone(&self) -> Self {
        assert_ne!(self.0, Self::POISON, "cloning a poisoned value");
        FailingClone(self.0)
    }
}

#[test]
fn test_failed_assign_keeps_old_contents() {
    let other = DynArray::from([FailingClone(1), FailingClone(FailingClone::POISON), FailingClone(3)]);

    // Large enough to reuse its buffer.
    let mut roomy = DynArray::with_cap(8);
    roomy.extend([FailingClone(7), FailingClone(8), FailingClone(9)]);
    assert_panics!({ roomy.assign(&other); }, "A panicking clone should propagate.");
    assert_eq!(
        &*roomy,
        &[FailingClone(7), FailingClone(8), FailingClone(9)],
        "A failed assign into a reused buffer shouldn't leave a partial copy."
    );
    assert_eq!(roomy.cap(), 8);

    // Too small, so it would be replaced.
    let mut cramped = DynArray::from([FailingClone(7)]);
    assert_panics!({ cramped.clone_from(&other); }, "A panicking clone should propagate.");
    assert_eq!(
        &*cramped,
        &[FailingClone(7)],
        "A failed assign into a new buffer shouldn't leave a partial copy."
    );
    assert_eq!(cramped.cap(), 1);
}

#[test]
fn test_huge_unsigned_index_is_reported_saturated() {
    let message = |result: std::thread::Result<()>| {
        result
            .expect_err("an out of bounds index should panic")
            .downcast_ref::<String>()
            .cloned()
    };
    let expected = Some(format!(
        "Index {} out of bounds for collection with 2 elements!",
        isize::MAX
    ));

    let mut arr = DynArray::from([1, 2]);
    assert_eq!(
        message(std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            arr.remove(usize::MAX);
        }))),
        expected,
        "Indices past isize::MAX shouldn't wrap around to negative."
    );
    assert_eq!(
        message(std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            arr.insert(usize::MAX, 0);
        }))),
        expected
    );
    assert_eq!(&*arr, &[1, 2]);
}

#[test]
#[cfg(feature = "numeric")]
fn test_sum_overflow() {
    let arr = DynArray::from([i64::MAX, 1]);
    assert_eq!(arr.checked_sum(), None, "An overflowing sum should be reported.");
    assert_eq!(
        arr.average(),
        Ok((i64::MAX as f64 + 1.0) / 2.0),
        "Averaging shouldn't overflow."
    );

    let arr = DynArray::from([i64::MAX - 1, 1, -5]);
    assert_eq!(arr.checked_sum(), Some(i64::MAX - 5));
    assert_eq!(DynArray::<u8>::new().checked_sum(), Some(0));
}

#[test]
#[cfg(feature = "numeric")]
fn test_scenario_sum_and_sorts() {
    let mut arr = DynArray::new();
    for value in [5, 3, 7, 1] {
        arr.push(value);
    }

    assert_eq!(arr.sum(), 16);
    assert_eq!(arr.average(), Ok(4.0));

    arr.sort_ascending();
    assert_eq!(&*arr, &[1, 3, 5, 7]);

    arr.sort_descending();
    assert_eq!(&*arr, &[7, 5, 3, 1]);
}

#[test]
#[cfg(feature = "numeric")]
fn test_average_of_empty() {
    let arr: DynArray<f64> = DynArray::new();
    assert_eq!(arr.sum(), 0.0);
    assert_eq!(arr.average(), Err(EmptyAverage));

    let error = DynArrayError::from(arr.average().unwrap_err());
    assert!(error.is_empty_average());
    assert_eq!(error.to_string(), "Can't average a collection with 0 elements!");
}

#[test]
fn test_float_sorting() {
    let mut arr = DynArray::from([2.5, -0.0, f64::INFINITY, 0.0, -3.0]);

    arr.sort_ascending();
    assert_eq!(&*arr, &[-3.0, -0.0, 0.0, 2.5, f64::INFINITY]);
    assert!(arr[1].is_sign_negative(), "Negative zero should sort first.");

    arr.sort_descending();
    assert_eq!(&*arr, &[f64::INFINITY, 2.5, 0.0, -0.0, -3.0]);
    assert!(arr[3].is_sign_negative());

    let mut arr = DynArray::from([f64::NAN.copysign(1.0), 1.0, f64::NAN.copysign(-1.0)]);
    arr.sort_ascending();
    assert!(arr[0].is_nan() && arr[2].is_nan(), "NaNs should sort to the ends without panicking.");
    assert_eq!(arr[1], 1.0);
}

#[test]
fn test_string_sorting() {
    let mut arr: DynArray<String> = ["pear", "apple", "fig"].into_iter().map(String::from).collect();
    arr.sort_ascending();
    assert_eq!(&*arr, &["apple", "fig", "pear"]);

    let mut arr = DynArray::from(["b", "c", "a"]);
    arr.sort_descending();
    assert_eq!(&*arr, &["c", "b", "a"]);
}

#[test]
fn test_display() {
    assert_eq!(DynArray::<i32>::new().to_string(), "{}");
    assert_eq!(DynArray::from([1]).to_string(), "{1}");
    assert_eq!(DynArray::from([1, 2, 3]).to_string(), "{1, 2, 3}");
    assert_eq!(DynArray::from([0.5, 2.0]).to_string(), "{0.5, 2}");

    assert_eq!(
        format!("{:?}", DynArray::from([1, 2])),
        "DynArray { contents: [1, 2], len: 2, cap: 2 }"
    );
}

#[test]
fn test_equality_and_hash() {
    let mut a = DynArray::from([1, 2, 3]);
    let b: DynArray<_> = (1..=3).collect();
    a.reserve(50);

    assert_eq!(a, b, "Capacity shouldn't affect equality.");
    assert_ne!(a, DynArray::from([1, 2]));
    assert_ne!(a, DynArray::from([1, 2, 4]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal arrays should produce the same hash."
    );
}

#[test]
fn test_capacity_management() {
    let mut arr = DynArray::from([1, 2, 3]);
    arr.reserve(10);
    assert!(arr.cap() >= 13);

    let cap = arr.cap();
    arr.reserve(1);
    assert_eq!(arr.cap(), cap, "Reserving within capacity shouldn't reallocate.");

    arr.shrink_to_fit();
    assert_eq!(arr.cap(), 3);

    arr.clear();
    assert_eq!(arr.cap(), 3, "Clearing should keep capacity.");
    arr.shrink_to_fit();
    assert_eq!(arr.cap(), MIN_CAP);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(arr);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let mut arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(arr.pop());
    drop(arr.remove(3));
    assert_eq!(counter.take(), 2);

    arr.set(0, counter.clone()).unwrap();
    assert_eq!(counter.take(), 1, "The replaced element should be dropped once.");

    arr.clear();
    assert_eq!(counter.take(), 8);
    drop(arr);
    assert_eq!(counter.take(), 0, "Spare capacity should never be dropped.");

    let mut arr = DynArray::with_cap(1);
    arr.extend(iter::repeat_with(|| counter.clone()).take(5));
    let mut copy = DynArray::new();
    copy.assign(&arr);
    copy.assign(&DynArray::new());
    assert_eq!(counter.take(), 5, "Assigning should drop the previous contents.");
}

#[test]
fn test_iterators() {
    let mut arr = DynArray::from([0_usize, 1, 2, 3, 4]);
    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(&*arr, &[0, 2, 4, 6, 8]);
    assert_eq!((&arr).into_iter().sum::<usize>(), 20);

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = DropCounter::new();
    let arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);
    drop(iter);
    assert_eq!(
        counter.take(),
        8,
        "Dropping an owned iterator should drop the remaining elements."
    );
}

#[test]
fn test_zst_support() {
    let mut arr = DynArray::new();
    for _ in 0..50 {
        arr.push(ZeroSizedType);
    }
    assert_eq!(arr.len(), 50);
    assert_eq!(arr.get(49), Ok(&ZeroSizedType));
    assert_eq!(arr.pop(), Some(ZeroSizedType));
    assert_eq!(arr.into_iter().count(), 49);
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Property: pushing n values yields len n, with every value retrievable by index.
        #[test]
        fn push_then_get(values in prop::collection::vec(any::<i64>(), 0..200)) {
            let mut arr = DynArray::new();
            for &value in &values {
                arr.push(value);
                prop_assert!(arr.len() <= arr.cap());
            }

            prop_assert_eq!(arr.len(), values.len());
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(arr.get(i as isize), Ok(value));
            }
            prop_assert!(arr.get(-1).is_err());
            prop_assert!(arr.get(values.len() as isize).is_err());
        }

        /// Property: a copy is equal to its source and mutating it leaves the source alone.
        #[test]
        fn copy_is_equal_and_independent(
            values in prop::collection::vec(any::<i32>(), 0..100),
            extra in any::<i32>(),
        ) {
            let a: DynArray<_> = values.iter().copied().collect();
            let mut b = a.clone();
            prop_assert_eq!(&b, &a);

            b.push(extra);
            if !b.is_empty() {
                b.set(0, extra.wrapping_add(1)).unwrap();
            }

            prop_assert_eq!(a.len(), values.len());
            prop_assert_eq!(&*a, values.as_slice());
        }

        /// Property: sorting ascending orders neighbours, descending is its exact reverse.
        #[test]
        fn sorts_are_ordered(values in prop::collection::vec(any::<f64>(), 0..100)) {
            let mut ascending: DynArray<_> = values.iter().copied().collect();
            ascending.sort_ascending();
            for pair in ascending.windows(2) {
                prop_assert!(pair[0].total_cmp(&pair[1]).is_le());
            }

            let mut descending: DynArray<_> = values.iter().copied().collect();
            descending.sort_descending();
            prop_assert!(
                descending.iter().rev().zip(ascending.iter()).all(|(a, b)| a.to_bits() == b.to_bits())
            );
        }
    }
}

#[cfg(feature = "numeric")]
mod numeric_proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Property: the average lies between the minimum and maximum.
        #[test]
        fn average_is_bounded(values in prop::collection::vec(-1_000_i32..1_000, 1..100)) {
            let arr: DynArray<_> = values.iter().copied().collect();
            let average = arr.average().unwrap();
            let min = *values.iter().min().unwrap() as f64;
            let max = *values.iter().max().unwrap() as f64;

            prop_assert!(min <= average && average <= max);
            prop_assert_eq!(arr.sum(), values.iter().sum::<i32>());
        }
    }
}
