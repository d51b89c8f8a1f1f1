//! A rational data type over fixed-width integers. The numerator and denominator types are chosen
//! independently, and nothing is normalized behind the caller's back: results of arithmetic are not
//! reduced, the sign may live in either field, and a zero denominator is a legal value.

use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{AsPrimitive, One, Zero};
use thiserror::Error;

use crate::int::FracInt;

/// A fraction `numerator / denominator`. See the module documentation for what is *not*
/// guaranteed about the two fields.
///
/// Equality and ordering are defined by [`Fraction::compare`], so `1/3 == 2/6` even though the
/// fields differ.
#[derive(Clone, Copy, Default)]
pub struct Fraction<T, U = T> {
    /// The numerator.
    pub numerator: T,
    /// The denominator. May be zero or negative.
    pub denominator: U,
}

/// 8-bit numerator and denominator. Cross products overflow quickly at this width.
pub type Frac8 = Fraction<i8, i8>;
/// 16-bit numerator and denominator.
pub type Frac16 = Fraction<i16, i16>;
/// 32-bit numerator and denominator.
pub type Frac32 = Fraction<i32, i32>;
/// 64-bit numerator and denominator.
pub type Frac64 = Fraction<i64, i64>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FracError {
    #[error("Could not approximate {0} as a fraction: value is not finite")]
    NonFinite(f64),
    #[error("Could not approximate {0} as a fraction: integer part does not fit the numerator")]
    OutOfRange(f64),
    #[error("Could not parse {0}")]
    StringParseError(String),
}

/// Greatest common divisor of `|a|` and `|b|`, by alternately reducing each operand modulo the
/// other. `gcd(a, 0) = |a|`, `gcd(0, b) = |b|` and `gcd(0, 0) = 0`.
///
/// Works on the unsigned magnitudes, so `i64::MIN` is fine.
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        a %= b;
        if a == 0 {
            return b;
        }

        b %= a;
    }

    a
}

impl<T, U> Fraction<T, U> {
    /// Creates a new `Fraction` from its fields, as-is.
    pub const fn new(numerator: T, denominator: U) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl<T: FracInt, U: FracInt> Fraction<T, U> {
    /// The integer `n` as `n/1`.
    pub fn from_integer(n: T) -> Self {
        Self::new(n, U::one())
    }

    /// The value as an `f32`. A zero denominator gives an infinity or NaN, per IEEE 754.
    pub fn float32(&self) -> f32 {
        let n: f32 = <T as AsPrimitive<f32>>::as_(self.numerator);
        let d: f32 = <U as AsPrimitive<f32>>::as_(self.denominator);
        n / d
    }

    /// The value as an `f64`. A zero denominator gives an infinity or NaN, per IEEE 754.
    pub fn float64(&self) -> f64 {
        let n: f64 = <T as AsPrimitive<f64>>::as_(self.numerator);
        let d: f64 = <U as AsPrimitive<f64>>::as_(self.denominator);
        n / d
    }

    /// Divides both fields by their greatest common divisor, keeping each field's sign. `0/0` has
    /// no divisor to take out and is returned unchanged.
    pub fn reduced(self) -> Self {
        let g = gcd(self.numerator.widen(), self.denominator.widen());
        if g == 0 {
            return self;
        }

        // 2^63 only comes out of gcd(MIN, MIN) or gcd(MIN, 0), where wrapping to MIN still
        // divides correctly.
        let g = g as i64;
        Self {
            numerator: T::narrow(self.numerator.widen().wrapping_div(g)),
            denominator: U::narrow(self.denominator.widen().wrapping_div(g)),
        }
    }

    /// In-place version of [`Fraction::reduced`].
    pub fn reduce(&mut self) {
        *self = self.reduced();
    }

    /// `a/b + c/d = (ad + cb) / bd`, unreduced.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self {
            numerator: lhs
                .numerator
                .wrapping_mul(&rhs.denominator.cast())
                .wrapping_add(&rhs.numerator.wrapping_mul(&lhs.denominator.cast())),
            denominator: lhs.denominator.wrapping_mul(&rhs.denominator),
        }
    }

    /// `a/b - c/d = (ad - cb) / bd`, unreduced.
    pub fn sub(lhs: Self, rhs: Self) -> Self {
        Self {
            numerator: lhs
                .numerator
                .wrapping_mul(&rhs.denominator.cast())
                .wrapping_sub(&rhs.numerator.wrapping_mul(&lhs.denominator.cast())),
            denominator: lhs.denominator.wrapping_mul(&rhs.denominator),
        }
    }

    /// `a/b * c/d = ac / bd`, unreduced.
    pub fn mul(lhs: Self, rhs: Self) -> Self {
        Self {
            numerator: lhs.numerator.wrapping_mul(&rhs.numerator),
            denominator: lhs.denominator.wrapping_mul(&rhs.denominator),
        }
    }

    /// `(a/b) / (c/d) = ad / bc`, unreduced. Dividing by a zero numerator leaves a zero
    /// denominator rather than panicking.
    pub fn div(lhs: Self, rhs: Self) -> Self {
        Self {
            numerator: lhs.numerator.wrapping_mul(&rhs.denominator.cast()),
            denominator: lhs.denominator.wrapping_mul(&rhs.numerator.cast()),
        }
    }

    /// One whole unit more, over the same denominator: `(n + d) / d`. Does not touch `self`; see
    /// [`Fraction::increment_in_place`] for the mutating form.
    #[must_use]
    pub fn increment(self) -> Self {
        Self {
            numerator: self.numerator.wrapping_add(&self.denominator.cast()),
            denominator: self.denominator,
        }
    }

    /// One whole unit less, over the same denominator: `(n - d) / d`. Does not touch `self`.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self {
            numerator: self.numerator.wrapping_sub(&self.denominator.cast()),
            denominator: self.denominator,
        }
    }

    /// [`Fraction::increment`] written back into `self`, which is returned for chaining.
    pub fn increment_in_place(&mut self) -> &mut Self {
        *self = self.increment();
        self
    }

    /// [`Fraction::decrement`] written back into `self`, which is returned for chaining.
    pub fn decrement_in_place(&mut self) -> &mut Self {
        *self = self.decrement();
        self
    }

    /// `self += rhs`, returning `self` so calls can be chained.
    pub fn apply_add(&mut self, rhs: Self) -> &mut Self {
        *self = Self::add(*self, rhs);
        self
    }

    /// `self -= rhs`, returning `self` so calls can be chained.
    pub fn apply_sub(&mut self, rhs: Self) -> &mut Self {
        *self = Self::sub(*self, rhs);
        self
    }

    /// `self *= rhs`, returning `self` so calls can be chained.
    pub fn apply_mul(&mut self, rhs: Self) -> &mut Self {
        *self = Self::mul(*self, rhs);
        self
    }

    /// `self /= rhs`, returning `self` so calls can be chained.
    pub fn apply_div(&mut self, rhs: Self) -> &mut Self {
        *self = Self::div(*self, rhs);
        self
    }
}

impl<T: FracInt, U: FracInt> From<Fraction<T, U>> for f64 {
    fn from(value: Fraction<T, U>) -> Self {
        value.float64()
    }
}

impl<T: FracInt, U: FracInt> From<Fraction<T, U>> for f32 {
    fn from(value: Fraction<T, U>) -> Self {
        value.float32()
    }
}

impl<T: FracInt, U: FracInt> Add for Fraction<T, U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Fraction::add(self, rhs)
    }
}

impl<T: FracInt, U: FracInt> AddAssign for Fraction<T, U> {
    fn add_assign(&mut self, rhs: Self) {
        self.apply_add(rhs);
    }
}

impl<T: FracInt, U: FracInt> Sub for Fraction<T, U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Fraction::sub(self, rhs)
    }
}

impl<T: FracInt, U: FracInt> SubAssign for Fraction<T, U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.apply_sub(rhs);
    }
}

impl<T: FracInt, U: FracInt> Mul for Fraction<T, U> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Fraction::mul(self, rhs)
    }
}

impl<T: FracInt, U: FracInt> MulAssign for Fraction<T, U> {
    fn mul_assign(&mut self, rhs: Self) {
        self.apply_mul(rhs);
    }
}

impl<T: FracInt, U: FracInt> Div for Fraction<T, U> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Fraction::div(self, rhs)
    }
}

impl<T: FracInt, U: FracInt> DivAssign for Fraction<T, U> {
    fn div_assign(&mut self, rhs: Self) {
        self.apply_div(rhs);
    }
}

impl<T: FracInt, U: FracInt> Neg for Fraction<T, U> {
    type Output = Self;

    /// Negates the denominator, not the numerator.
    fn neg(self) -> Self::Output {
        Self::new(self.numerator, self.denominator.wrapping_neg())
    }
}

impl<T: FracInt, U: FracInt> Zero for Fraction<T, U> {
    fn zero() -> Self {
        Self::new(T::zero(), U::one())
    }

    /// Any zero numerator counts, including `0/0`.
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<T: FracInt, U: FracInt> One for Fraction<T, U> {
    fn one() -> Self {
        Self::new(T::one(), U::one())
    }
}

impl<T: Debug, U: Debug> Debug for Fraction<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frac!({:?}/{:?})", self.numerator, self.denominator)
    }
}

/// `numerator/denominator`, exactly as stored.
impl<T: Display, U: Display> Display for Fraction<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Shorthand for building a [`Fraction`]: `frac!(3 / 4)` or `frac!(2)` for `2/1`.
#[macro_export]
macro_rules! frac {
    ($num:literal / $denom:expr) => {
        $crate::fract::Fraction::new($num, $denom)
    };
    ($num:expr) => {
        $crate::fract::Fraction::from_integer($num)
    };
}
