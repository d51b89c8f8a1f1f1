//! The integer types a [`Fraction`](crate::fract::Fraction) can be built from.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{AsPrimitive, PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

/// A fixed-width signed integer usable as a numerator or denominator. Implemented for `i8`, `i16`,
/// `i32` and `i64`.
///
/// Arithmetic on fractions goes through the `Wrapping*` operations, so overflow wraps in two's
/// complement instead of panicking in debug builds.
pub trait FracInt:
    PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Default
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Sign-extends to 64 bits.
    fn widen(self) -> i64;

    /// Truncates a 64-bit value to this width, like an `as` cast.
    fn narrow(wide: i64) -> Self;

    /// Converts between integer widths with `as` semantics.
    #[inline]
    fn cast<V: FracInt>(self) -> V {
        V::narrow(self.widen())
    }
}

macro_rules! impl_frac_int {
    ($($t:ty),*) => {
        $(
            impl FracInt for $t {
                #[inline(always)]
                fn widen(self) -> i64 {
                    self as i64
                }

                #[inline(always)]
                fn narrow(wide: i64) -> Self {
                    wide as $t
                }
            }
        )*
    };
}

impl_frac_int!(i8, i16, i32, i64);
