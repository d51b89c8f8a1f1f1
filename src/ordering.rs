//! Comparison of fractions by the sign of a difference.
//!
//! Any fraction with a zero numerator is treated as plain zero, whatever its denominator. This
//! keeps `0/0` comparable: it is equal to `0/5` and less than `1/2`. Every other comparison
//! reduces both sides and looks at the numerator of their cross-multiplied difference.
//!
//! The relation is not a total order (a negative denominator flips the sign of the cross product
//! but not of the zero rule, and wide values can overflow), so only [`PartialEq`] and
//! [`PartialOrd`] are implemented.

use std::cmp::Ordering;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{fract::Fraction, int::FracInt};

impl<T: FracInt, U: FracInt> Fraction<T, U> {
    /// Returns a value whose sign orders `lhs` against `rhs`: negative if `lhs < rhs`, zero if
    /// they are equal, positive if `lhs > rhs`. The magnitude carries no meaning.
    pub fn compare(lhs: Self, rhs: Self) -> T {
        if lhs.numerator.is_zero() || rhs.numerator.is_zero() {
            return lhs.numerator.wrapping_sub(&rhs.numerator);
        }

        Fraction::sub(lhs.reduced(), rhs.reduced()).numerator
    }

    pub fn equals(lhs: Self, rhs: Self) -> bool {
        Self::compare(lhs, rhs).is_zero()
    }

    pub fn not_equals(lhs: Self, rhs: Self) -> bool {
        !Self::equals(lhs, rhs)
    }

    pub fn less_than(lhs: Self, rhs: Self) -> bool {
        Self::compare(lhs, rhs).is_negative()
    }

    pub fn greater_than(lhs: Self, rhs: Self) -> bool {
        Self::compare(lhs, rhs).is_positive()
    }

    pub fn less_or_equal(lhs: Self, rhs: Self) -> bool {
        !Self::compare(lhs, rhs).is_positive()
    }

    pub fn greater_or_equal(lhs: Self, rhs: Self) -> bool {
        !Self::compare(lhs, rhs).is_negative()
    }
}

impl<T: FracInt, U: FracInt> PartialEq for Fraction<T, U> {
    fn eq(&self, other: &Self) -> bool {
        Self::equals(*self, *other)
    }
}

impl<T: FracInt, U: FracInt> PartialOrd for Fraction<T, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Self::compare(*self, *other).cmp(&T::zero()))
    }
}

impl<T: FracInt, U: FracInt> AbsDiffEq for Fraction<T, U> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.float64().abs_diff_eq(&other.float64(), epsilon)
    }
}

impl<T: FracInt, U: FracInt> RelativeEq for Fraction<T, U> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.float64()
            .relative_eq(&other.float64(), epsilon, max_relative)
    }
}

impl<T: FracInt, U: FracInt> UlpsEq for Fraction<T, U> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.float64().ulps_eq(&other.float64(), epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fract::{Frac16, Frac32, Frac64, Frac8};

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_equality() {
        assert!(Frac8::new(1, 3) != Frac8::new(2, 3));
        assert!(Frac8::new(1, 3) == Frac8::new(1, 3));
        assert!(Frac8::new(1, 3) == Frac8::new(2, 6));

        assert!(!(Frac16::new(2, 9) != Frac16::new(2, 9)));
        assert!(Frac16::new(2, 9) != Frac16::new(1, 3));
        assert!(!(Frac16::new(2, 9) != Frac16::new(4, 18)));
    }

    #[test]
    fn test_negation_equivalence() {
        assert!(-Frac32::new(1, 3) == Frac32::new(-1, 3));
        assert!(-Frac32::new(1, 3) == Frac32::new(1, -3));
        assert!(Frac32::new(-1, 3) == Frac32::new(1, -3));
    }

    #[test]
    fn test_ordering() {
        assert!(!(Frac32::new(2, 9) > Frac32::new(2, 9)));
        assert!(Frac32::new(2, 9) >= Frac32::new(2, 9));
        assert!(Frac32::new(2, 9) > Frac32::new(1, 9));
        assert!(!(Frac32::new(2, 9) > Frac32::new(3, 9)));

        assert!(!(Frac64::new(2, 9) < Frac64::new(2, 9)));
        assert!(Frac64::new(2, 9) <= Frac64::new(2, 9));
        assert!(!(Frac64::new(2, 9) < Frac64::new(1, 9)));
        assert!(Frac64::new(2, 9) < Frac64::new(3, 9));
    }

    #[test]
    fn test_zero_sentinel() {
        let z = Frac32::new(0, 0);
        let half = Frac32::new(1, 2);

        assert!(!(Frac32::new(2, 9) == z));
        assert!(z == z);
        assert!(!(z != z));
        assert!(z != Frac32::new(2, 9));
        assert!(z < half);
        assert!(!(half < z));
        assert!(!(z < z));
        assert!(z <= half);
        assert!(!(half <= z));
        assert!(z <= z);
        assert!(!(z > half));
        assert!(half > z);
        assert!(!(z > z));
        assert!(!(z >= half));
        assert!(half >= z);
        assert!(z >= z);

        assert!(Frac32::new(0, 7) == Frac32::new(0, -3));
        assert!(Frac32::new(0, 7) == z);
    }

    #[test]
    fn test_named_predicates() {
        let (a, b) = (Frac16::new(1, 4), Frac16::new(1, 2));
        assert!(Frac16::less_than(a, b));
        assert!(Frac16::less_or_equal(a, b));
        assert!(Frac16::greater_than(b, a));
        assert!(Frac16::greater_or_equal(b, a));
        assert!(Frac16::not_equals(a, b));
        assert!(Frac16::equals(a, Frac16::new(2, 8)));
    }

    #[test]
    fn test_compare_value() {
        assert_eq!(Frac32::compare(Frac32::new(0, 0), Frac32::new(3, 4)), -3);
        assert_eq!(Frac32::compare(Frac32::new(1, 3), Frac32::new(2, 6)), 0);
        // 1/2 - 1/3 = (3 - 2) / 6
        assert_eq!(Frac32::compare(Frac32::new(2, 4), Frac32::new(1, 3)), 1);
        assert_eq!(
            Frac32::new(1, 2).partial_cmp(&Frac32::new(3, 4)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_zero_denominator_not_sentinel() {
        // Only a zero numerator triggers the zero rule; n/0 goes through the cross product.
        assert!(Frac32::new(1, 0) == Frac32::new(5, 0));
        assert!(Frac32::new(1, 0) != Frac32::new(1, 2));
    }

    #[test]
    fn test_approx() {
        assert_abs_diff_eq!(Frac32::new(1, 3), Frac32::new(333, 1000), epsilon = 1e-3);
        assert_relative_eq!(Frac64::new(2, 4), Frac64::new(1, 2));
    }

    prop_compose! {
        fn small_frac()(n in -1000i32..1000, d in (1i32..1000).prop_union(-1000i32..-1)) -> Frac32 {
            Frac32::new(n, d)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]
        #[test]
        fn test_operators_agree_with_compare(a in small_frac(), b in small_frac()) {
            let c = Frac32::compare(a, b);
            prop_assert_eq!(a == b, c == 0);
            prop_assert_eq!(a != b, c != 0);
            prop_assert_eq!(a < b, c < 0);
            prop_assert_eq!(a > b, c > 0);
            prop_assert_eq!(a <= b, c <= 0);
            prop_assert_eq!(a >= b, c >= 0);
        }

        #[test]
        fn test_scaled_fractions_are_equal(a in small_frac(), k in 1i32..30) {
            prop_assume!(a.numerator != 0);
            prop_assert!(a == Frac32::new(a.numerator * k, a.denominator * k));
        }

        #[test]
        fn test_positive_order_matches_cross_product(
            n1 in 1i32..1000, d1 in 1i32..1000, n2 in 1i32..1000, d2 in 1i32..1000
        ) {
            let (a, b) = (Frac32::new(n1, d1), Frac32::new(n2, d2));
            let exact = (n1 as i64 * d2 as i64).cmp(&(n2 as i64 * d1 as i64));
            prop_assert_eq!(a.partial_cmp(&b), Some(exact));
        }
    }
}
