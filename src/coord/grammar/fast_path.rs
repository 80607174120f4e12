//! Fast-path parsing for plain decimal-degree inputs
//!
//! Most real-world cells are a bare signed decimal number ("40.7128",
//! "-74.006"). Those never need the full pattern with its capture groups;
//! a few nom combinators decide the whole string. Anything else falls back
//! to the general grammar.

use nom::{
    character::complete::{char, digit1},
    combinator::{eof, opt},
    sequence::preceded,
    IResult, Parser,
};

use crate::coord::{CoordinateGroup, ParsedInput};

/// Result of attempting the fast path.
#[derive(Debug)]
pub enum FastPathResult {
    /// The input was a plain decimal number; here is the parsed group.
    Success(ParsedInput),
    /// Not a plain decimal number; use the general grammar.
    Fallback,
}

/// Try to parse the input as a bare signed decimal degree value.
///
/// Succeeds only when the trimmed input is exactly `-?digits[.digits]`;
/// hemisphere letters, minute/second fields, pairs and parentheses all fall
/// back. On the fallback subset this is semantically identical to the full
/// pattern, which would capture the same single degrees value.
pub fn try_fast_path(input: &str) -> FastPathResult {
    match decimal_degrees(input.trim()) {
        Ok((_, group)) => FastPathResult::Success(ParsedInput::Single(group)),
        Err(_) => FastPathResult::Fallback,
    }
}

fn decimal_degrees(input: &str) -> IResult<&str, CoordinateGroup> {
    let start = input;
    let (input, _sign) = opt(char('-')).parse(input)?;
    let (input, _whole) = digit1.parse(input)?;
    let (input, _frac) = opt(preceded(char('.'), digit1)).parse(input)?;
    let (input, _) = eof.parse(input)?;

    // The consumed text conforms to -?\d+(\.\d+)?, so float parsing can only
    // fail on overflow to infinity, which the bound check rejects later.
    let matched = &start[..start.len() - input.len()];
    let degrees: f64 = matched.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;

    Ok((input, CoordinateGroup::from_degrees(degrees)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(input: &str) -> Option<f64> {
        match try_fast_path(input) {
            FastPathResult::Success(ParsedInput::Single(g)) => Some(g.degrees),
            _ => None,
        }
    }

    #[test]
    fn test_fast_path_plain_decimal() {
        assert_eq!(fast("40.7128"), Some(40.7128));
        assert_eq!(fast("-74.006"), Some(-74.006));
        assert_eq!(fast("0"), Some(0.0));
        assert_eq!(fast("  12.5  "), Some(12.5));
    }

    #[test]
    fn test_fast_path_fallback() {
        assert!(matches!(try_fast_path("40.7128 N"), FastPathResult::Fallback));
        assert!(matches!(try_fast_path("40° 30′"), FastPathResult::Fallback));
        assert!(matches!(try_fast_path("40.5, -74"), FastPathResult::Fallback));
        assert!(matches!(try_fast_path("(40.5)"), FastPathResult::Fallback));
        assert!(matches!(try_fast_path("+40"), FastPathResult::Fallback));
        assert!(matches!(try_fast_path("40."), FastPathResult::Fallback));
        assert!(matches!(try_fast_path(".5"), FastPathResult::Fallback));
        assert!(matches!(try_fast_path(""), FastPathResult::Fallback));
        assert!(matches!(try_fast_path("1e5"), FastPathResult::Fallback));
    }
}
