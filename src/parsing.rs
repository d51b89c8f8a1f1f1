//! Parsing fractions back from the `numerator/denominator` form they display as.

use std::str::FromStr;

use nom::character::complete::{char, i64 as int, multispace0};
use nom::combinator::opt;
use nom::error::ParseError;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;

use crate::{
    fract::{FracError, Fraction},
    int::FracInt,
};

/// Parses `n/d` or a bare integer `n`, each optionally signed and padded with whitespace. The
/// integers are read at 64 bits; narrowing to the fraction's types happens in [`FromStr`].
pub fn fraction(input: &str) -> IResult<&str, (i64, Option<i64>)> {
    pair(ws(int), opt(preceded(char('/'), ws(int))))(input)
}

fn ws<'a, F: 'a, O, E: ParseError<&'a str>>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: Fn(&'a str) -> IResult<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

fn fit<V: FracInt>(wide: i64) -> Option<V> {
    let v = V::narrow(wide);
    (v.widen() == wide).then_some(v)
}

impl<T: FracInt, U: FracInt> FromStr for Fraction<T, U> {
    type Err = FracError;

    /// Reads the fields as written: nothing is reduced, and a bare integer gets denominator 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FracError::StringParseError(s.to_owned());
        let (o, (n, d)) = fraction(s).map_err(|_e| err())?;
        if !o.is_empty() {
            return Err(err());
        }

        let numerator = fit::<T>(n).ok_or_else(err)?;
        let denominator = fit::<U>(d.unwrap_or(1)).ok_or_else(err)?;
        Ok(Self::new(numerator, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fract::{Frac16, Frac32, Frac64, Frac8};

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn parse_fields(s: &str) -> Result<(i32, i32), FracError> {
        let f: Frac32 = s.parse()?;
        Ok((f.numerator, f.denominator))
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_fields("1/2"), Ok((1, 2)));
        assert_eq!(parse_fields("2/4"), Ok((2, 4)));
        assert_eq!(parse_fields(" -3 / 4 "), Ok((-3, 4)));
        assert_eq!(parse_fields("1/-3"), Ok((1, -3)));
        assert_eq!(parse_fields("+7/8"), Ok((7, 8)));
        assert_eq!(parse_fields("5"), Ok((5, 1)));
        assert_eq!(parse_fields("0/0"), Ok((0, 0)));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "1/", "/2", "abc", "1/2/3", "1.5", "1 2", "3/4x"] {
            assert_eq!(
                parse_fields(bad),
                Err(FracError::StringParseError(bad.to_owned())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_parse_range() {
        assert!("300/1".parse::<Frac8>().is_err());
        assert!("1/128".parse::<Frac8>().is_err());
        assert!("-128/127".parse::<Frac8>().is_ok());
        assert!("99999999999/1".parse::<Frac32>().is_err());
        assert!("99999999999/1".parse::<Frac64>().is_ok());
    }

    #[test]
    fn test_fraction_parser() {
        assert_eq!(fraction("3/4 rest"), Ok(("rest", (3, Some(4)))));
        assert_eq!(fraction("12"), Ok(("", (12, None))));
    }

    proptest! {
        #[test]
        fn test_display_roundtrip(n in any::<i16>(), d in any::<i16>()) {
            let f = Frac16::new(n, d);
            let back: Frac16 = f.to_string().parse().unwrap();
            prop_assert_eq!((back.numerator, back.denominator), (n, d));
        }
    }
}
