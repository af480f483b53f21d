use std::cmp::Ordering;

/// A total order over a type, used by collections when sorting.
///
/// This differs from [`Ord`] in that it can be implemented for floating point numbers, using the
/// IEEE 754 `totalOrder` predicate. Sorting by a [`PartialOrd`] comparison that isn't actually
/// total can panic, so collections require this trait instead.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use growable_array::collections::traits::TotalOrder;
/// assert_eq!(3_u8.total_order(&7), Ordering::Less);
/// assert_eq!(2.5_f64.total_order(&1.5), Ordering::Greater);
/// assert_eq!((-0.0_f64).total_order(&0.0), Ordering::Less);
/// ```
pub trait TotalOrder {
    /// Compares `self` with `other`, consistently with every other comparison of the same type.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_order_by_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalOrder for $t {
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_total_order_by_ord!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, str, String,
);

macro_rules! impl_total_order_by_total_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalOrder for $t {
                fn total_order(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_total_order_by_total_cmp!(f32, f64);

impl<T: TotalOrder + ?Sized> TotalOrder for &T {
    fn total_order(&self, other: &Self) -> Ordering {
        T::total_order(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_order_is_total() {
        let nan = f64::NAN.copysign(1.0);
        let mut floats = [nan, 1.5, -0.0, f64::NEG_INFINITY, 0.0, -2.0];
        floats.sort_unstable_by(|a, b| a.total_order(b));

        assert_eq!(floats[0], f64::NEG_INFINITY);
        assert_eq!(&floats[1..5], &[-2.0, -0.0, 0.0, 1.5]);
        assert!(
            floats[1..5][1].is_sign_negative(),
            "Negative zero should be ordered before positive zero."
        );
        assert!(floats[5].is_nan(), "Positive NaN should be ordered last.");
    }

    #[test]
    fn test_references_and_strings() {
        let a = String::from("apple");
        let b = String::from("banana");
        assert_eq!(a.total_order(&b), Ordering::Less);
        assert_eq!(<&String as TotalOrder>::total_order(&&b, &&a), Ordering::Greater);
        assert_eq!("pear".total_order("pear"), Ordering::Equal);
    }
}
