//! Arithmetic between a fraction and a plain integer of the denominator's type.
//!
//! These skip the general cross-product formulas: adding `s` only touches the numerator
//! (`n + s*d` over the same `d`), multiplying scales the numerator and dividing scales the
//! denominator.
//!
//! With the scalar on the left, `s + f` and `s * f` commute as expected, but `s - f` and `s / f`
//! keep the fraction as the leading operand: `s - n/d` is `(n - s*d) / d` and `s / (n/d)` is
//! `n / (d*s)`, the same as `f - s` and `f / s`. [`Fraction::subtracted_from`] and
//! [`Fraction::divided_into`] put the scalar first.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::{fract::Fraction, int::FracInt};

impl<T: FracInt, U: FracInt> Add<U> for Fraction<T, U> {
    type Output = Self;

    fn add(self, rhs: U) -> Self::Output {
        Self::new(
            self.numerator
                .wrapping_add(&rhs.wrapping_mul(&self.denominator).cast()),
            self.denominator,
        )
    }
}

impl<T: FracInt, U: FracInt> Sub<U> for Fraction<T, U> {
    type Output = Self;

    fn sub(self, rhs: U) -> Self::Output {
        Self::new(
            self.numerator
                .wrapping_sub(&rhs.wrapping_mul(&self.denominator).cast()),
            self.denominator,
        )
    }
}

impl<T: FracInt, U: FracInt> Mul<U> for Fraction<T, U> {
    type Output = Self;

    fn mul(self, rhs: U) -> Self::Output {
        Self::new(self.numerator.wrapping_mul(&rhs.cast()), self.denominator)
    }
}

impl<T: FracInt, U: FracInt> Div<U> for Fraction<T, U> {
    type Output = Self;

    fn div(self, rhs: U) -> Self::Output {
        Self::new(self.numerator, self.denominator.wrapping_mul(&rhs))
    }
}

impl<T: FracInt, U: FracInt> AddAssign<U> for Fraction<T, U> {
    fn add_assign(&mut self, rhs: U) {
        *self = *self + rhs;
    }
}

impl<T: FracInt, U: FracInt> SubAssign<U> for Fraction<T, U> {
    fn sub_assign(&mut self, rhs: U) {
        *self = *self - rhs;
    }
}

impl<T: FracInt, U: FracInt> MulAssign<U> for Fraction<T, U> {
    fn mul_assign(&mut self, rhs: U) {
        *self = *self * rhs;
    }
}

impl<T: FracInt, U: FracInt> DivAssign<U> for Fraction<T, U> {
    fn div_assign(&mut self, rhs: U) {
        *self = *self / rhs;
    }
}

impl<T: FracInt, U: FracInt> Fraction<T, U> {
    /// `lhs - self` over the same denominator: `(s*d - n) / d`.
    pub fn subtracted_from(self, lhs: U) -> Self {
        let whole: T = lhs.wrapping_mul(&self.denominator).cast();
        Self::new(whole.wrapping_sub(&self.numerator), self.denominator)
    }

    /// `lhs / self`, flipping the fraction: `s*d / n`.
    pub fn divided_into(self, lhs: U) -> Self {
        let whole: T = lhs.wrapping_mul(&self.denominator).cast();
        Self::new(whole, self.numerator.cast())
    }
}

// The scalar on the left. Coherence rules out a blanket impl over U, so each width gets its own.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<T: FracInt> Add<Fraction<T, $t>> for $t {
                type Output = Fraction<T, $t>;

                fn add(self, rhs: Fraction<T, $t>) -> Self::Output {
                    rhs + self
                }
            }

            impl<T: FracInt> Mul<Fraction<T, $t>> for $t {
                type Output = Fraction<T, $t>;

                fn mul(self, rhs: Fraction<T, $t>) -> Self::Output {
                    rhs * self
                }
            }

            /// `s - n/d` is `(n - s*d) / d`
            impl<T: FracInt> Sub<Fraction<T, $t>> for $t {
                type Output = Fraction<T, $t>;

                fn sub(self, rhs: Fraction<T, $t>) -> Self::Output {
                    rhs - self
                }
            }

            /// `s / (n/d)` is `n / (d*s)`
            impl<T: FracInt> Div<Fraction<T, $t>> for $t {
                type Output = Fraction<T, $t>;

                fn div(self, rhs: Fraction<T, $t>) -> Self::Output {
                    rhs / self
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64);
