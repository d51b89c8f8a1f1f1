//! Approximating floats as fractions by decimal expansion.
//!
//! The value is split into its integer part and the fraction after the point. The integer part
//! is kept whole and has to fit in the numerator type. The fractional part is scaled by 1, 10,
//! 100, ... and floored, so extra digits are truncated, never rounded up: `0.999` in an `i8`
//! fraction is `99/100`. The expansion stops once `numerator/exp` reproduces the input at the
//! input's own precision, so `1.555` becomes `1555/1000 = 311/200`.
//!
//! A float that stores a short decimal a hair below its true value, such as `0.29`, would floor
//! one unit short at every scale. A candidate is stepped up by one when the step lands exactly
//! on the input.
//!
//! This is not continued-fraction reconstruction: `1/3` comes out as a long decimal, not `1/3`.

use num_traits::{Float, NumCast};

use crate::{
    fract::{FracError, Fraction},
    int::FracInt,
};

/// Enough digits to exhaust an `f64`, and 10^18 still fits in an `i64`.
pub const DEFAULT_MAX_DIGITS: u32 = 18;

/// Settings for turning floats into fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalExpansion {
    /// The most decimal places tried before settling for the closest candidate. The denominator
    /// type also caps this: the power of ten always has to fit in it.
    pub max_digits: u32,
}

impl Default for DecimalExpansion {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalExpansion {
    pub const fn new() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }

    pub const fn with_max_digits(self, max_digits: u32) -> Self {
        Self { max_digits }
    }

    /// Approximates `value`, returning the reduced fraction.
    ///
    /// Errors if `value` is NaN or infinite, or if its integer part does not fit in `T`. Running
    /// out of digits or of room in `T`/`U` is not an error: the last candidate that fit is used.
    pub fn approximate<T: FracInt, U: FracInt, F: Float>(
        &self,
        value: F,
    ) -> Result<Fraction<T, U>, FracError> {
        let as_f64 = value.to_f64().unwrap_or(f64::NAN);
        if !value.is_finite() {
            return Err(FracError::NonFinite(as_f64));
        }

        let int = value
            .trunc()
            .to_i64()
            .filter(|&i| T::narrow(i).widen() == i)
            .ok_or(FracError::OutOfRange(as_f64))?;

        // floor of a negative fraction can push a minimum integer part out of range
        let mut exp: i64 = 1;
        let mut best = candidate::<T, F>(value, int, exp).unwrap_or(int);
        let mut digits = 0;

        while !reproduces(value, best, exp) {
            if digits >= self.max_digits {
                log::debug!("{as_f64}: no exact expansion within {digits} digits");
                break;
            }

            let next_exp = match exp.checked_mul(10) {
                Some(e) if U::narrow(e).widen() == e => e,
                _ => {
                    log::debug!("{as_f64}: denominator range exhausted at {exp}");
                    break;
                }
            };

            match candidate::<T, F>(value, int, next_exp) {
                Some(c) => {
                    exp = next_exp;
                    best = c;
                    digits += 1;
                    log::trace!("{as_f64}: trying {best}/{exp}");
                }
                None => {
                    log::debug!("{as_f64}: numerator range exhausted at {exp}");
                    break;
                }
            }
        }

        Ok(Fraction::new(T::narrow(best), U::narrow(exp)).reduced())
    }
}

/// `int*exp + floor(fract(value) * exp)`, if it fits in `T`.
fn candidate<T: FracInt, F: Float>(value: F, int: i64, exp: i64) -> Option<i64> {
    let whole = int.checked_mul(exp)?;
    // scale the whole value so the product rounds at the input's magnitude
    let scaled = value * <F as NumCast>::from(exp)? - <F as NumCast>::from(whole)?;
    let mut c = whole.checked_add(scaled.floor().to_i64()?)?;
    if let Some(up) = c.checked_add(1).filter(|&up| reproduces(value, up, exp)) {
        c = up;
    }
    (T::narrow(c).widen() == c).then_some(c)
}

fn reproduces<F: Float>(value: F, candidate: i64, exp: i64) -> bool {
    match (<F as NumCast>::from(candidate), <F as NumCast>::from(exp)) {
        (Some(c), Some(e)) => c / e == value,
        _ => false,
    }
}

impl<T: FracInt, U: FracInt> Fraction<T, U> {
    /// Approximates a float with the default [`DecimalExpansion`].
    pub fn try_from_float<F: Float>(value: F) -> Result<Self, FracError> {
        DecimalExpansion::default().approximate(value)
    }

    /// Like [`Fraction::try_from_float`], but gives the zero fraction `0/0` for values that cannot
    /// be approximated.
    pub fn from_float<F: Float>(value: F) -> Self {
        Self::try_from_float(value).unwrap_or_else(|e| {
            log::warn!("{e}");
            Self::default()
        })
    }
}
