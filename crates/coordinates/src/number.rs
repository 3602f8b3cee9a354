use std::fmt::{Debug, Display};
use std::str::FromStr;

use num::traits::AsPrimitive;

use crate::trait_alias_macro::trait_alias;

trait_alias!(
    /// Any primitive integer or float usable as a coordinate.
    ///
    /// `AsPrimitive<f64>` is what lets every measurement come out in double
    /// precision no matter what the points were entered as.
    pub trait Number = num::Num
    + AsPrimitive<f64>
    + Copy
    + PartialOrd
    + Default
    + Debug
    + Display
    + FromStr
    + CheckedScalar
    + 'static
);

/// Scaling that reports overflow instead of panicking or wrapping.
///
/// Integers overflow on `MAX * 2` or `MIN / -1`; floats never fail here and
/// saturate to infinity like the rest of their arithmetic.
pub trait CheckedScalar: Sized {
    fn checked_scale(self, factor: Self) -> Option<Self>;
    fn checked_shrink(self, divisor: Self) -> Option<Self>;
}

macro_rules! impl_checked_scalar_for_integers {
    ($($int:ty),*) => {$(
        impl CheckedScalar for $int {
            fn checked_scale(self, factor: Self) -> Option<Self> {
                self.checked_mul(factor)
            }
            fn checked_shrink(self, divisor: Self) -> Option<Self> {
                self.checked_div(divisor)
            }
        }
    )*};
}

macro_rules! impl_checked_scalar_for_floats {
    ($($float:ty),*) => {$(
        impl CheckedScalar for $float {
            fn checked_scale(self, factor: Self) -> Option<Self> {
                Some(self * factor)
            }
            fn checked_shrink(self, divisor: Self) -> Option<Self> {
                Some(self / divisor)
            }
        }
    )*};
}

impl_checked_scalar_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_checked_scalar_for_floats!(f32, f64);
