//! Fractions over fixed-width integers, with independently chosen numerator and denominator types.
//!
//! Values are kept exactly as computed: nothing is reduced automatically, the sign may sit in
//! either field, and integer overflow wraps. See [`fract`] for the type itself and [`ordering`] for
//! how fractions compare (including the rule that every zero-numerator fraction is zero).

pub mod decimal;
pub mod fract;
pub mod int;
pub mod ordering;
pub mod parsing;
pub mod scalar;

pub use decimal::{DecimalExpansion, DEFAULT_MAX_DIGITS};
pub use fract::{gcd, Frac16, Frac32, Frac64, Frac8, FracError, Fraction};
pub use int::FracInt;
