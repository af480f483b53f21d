use std::ops::Add;

use super::TotalOrder;

/// A primitive number which collections can sum and average.
pub trait Number: Copy + TotalOrder + Add<Output = Self> {
    /// The additive identity, where summing starts from.
    const ZERO: Self;

    /// Adds `other` to self, returning [`None`] if the result doesn't fit. Floats never fail,
    /// they saturate to an infinity instead.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Converts self to an [`f64`], rounding to the nearest representable value if required.
    fn as_f64(self) -> f64;
}

macro_rules! impl_number {
    (integers: $($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }

                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
    (floats: $($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                #[allow(clippy::cast_lossless)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(integers: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_number!(floats: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        assert_eq!(Number::checked_add(250_u8, 5), Some(255));
        assert_eq!(Number::checked_add(250_u8, 6), None);
        assert_eq!(Number::checked_add(i64::MIN, -1), None);
        assert_eq!(Number::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
    }
}
