//! Coordinate lexical grammar
//!
//! Decomposes one input string into zero, one, or two coordinate capture
//! groups. The grammar is a single compiled pattern with named capture
//! groups; it tolerates the notations people actually write: decimal
//! degrees, degrees/minutes/seconds with Unicode or ASCII marks, leading or
//! trailing hemisphere letters, parenthesized pairs, and arbitrary leading
//! junk before the first group.
//!
//! A plain signed decimal number (by far the most common input) skips the
//! pattern entirely via [`fast_path`].

pub mod fast_path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::coord::{CoordinateGroup, Hemisphere, ParsedInput};

/// Decimal number: digits with optional fraction. No sign: the sign is part
/// of the degrees capture only.
const FLOAT: &str = r"\d+(?:\.\d+)?";

/// One coordinate group: optional leading letter, signed degrees, optional
/// minutes introduced by a degree-like mark (`°`, `D`, `*`, or whitespace)
/// and optionally closed by `′`/`'`/`m`, optional seconds closed by
/// `″`/`"`/`s`, optional trailing letter.
fn group_pattern(tag: &str) -> String {
    format!(
        "(?P<lead{tag}>[NSEW])?[ ]*\
         (?P<deg{tag}>-?{FLOAT})\
         (?:[°D*\\s][ ]*\
         (?:(?P<min{tag}>{FLOAT})[′'m]?[ ]*)?\
         (?:(?P<sec{tag}>{FLOAT})[″\"s][ ]*)?\
         )?\
         (?P<trail{tag}>[NSEW])?"
    )
}

/// The full pattern: a lazily-skipped prefix, an optional opening paren, one
/// group, an optional delimited second group, an optional closing paren and
/// trailing whitespace. Lazy prefix plus end anchor reproduce the original
/// leading-junk tolerance: the shortest prefix that lets the rest match wins.
static COORDINATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let first = group_pattern("");
    let second = group_pattern("2");
    let pattern = format!(r"^.*?[(]?{first}(?:\s*[,;/\s]\s*{second})?[)]?\s*$");
    Regex::new(&pattern).expect("coordinate pattern is valid")
});

/// Parse one raw string into coordinate capture groups.
///
/// Returns `None` on grammar failure, including the edge case where the
/// pattern matches without capturing a degree value for the primary group.
/// Null-value interception happens upstream; this function sees only text
/// that is meant to be a coordinate.
///
/// # Example
///
/// ```
/// use geoclean::coord::grammar::parse_coordinate_text;
/// use geoclean::coord::ParsedInput;
///
/// let parsed = parse_coordinate_text("40.7128 N, 74.0060 W").unwrap();
/// assert!(matches!(parsed, ParsedInput::Pair(_, _)));
/// ```
pub fn parse_coordinate_text(input: &str) -> Option<ParsedInput> {
    if let fast_path::FastPathResult::Success(parsed) = fast_path::try_fast_path(input) {
        return Some(parsed);
    }

    // Doubled ASCII apostrophe is an informal seconds mark.
    let normalized = input.replace("''", "\"");

    let caps = COORDINATE_PATTERN.captures(&normalized)?;
    if caps.name("deg").map_or(true, |m| m.as_str().is_empty()) {
        return None;
    }

    let first = extract_group(&caps, "")?;
    match caps.name("deg2") {
        Some(_) => {
            let second = extract_group(&caps, "2")?;
            Some(ParsedInput::Pair(first, second))
        }
        None => Some(ParsedInput::Single(first)),
    }
}

fn extract_group(caps: &Captures<'_>, tag: &str) -> Option<CoordinateGroup> {
    let field = |name: &str| caps.name(&format!("{name}{tag}"));

    let degrees: f64 = field("deg")?.as_str().parse().ok()?;
    let minutes = match field("min") {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    let seconds = match field("sec") {
        Some(s) => Some(s.as_str().parse().ok()?),
        None => None,
    };
    let letter = |m: regex::Match<'_>| m.as_str().chars().next().and_then(Hemisphere::from_letter);
    let leading = field("lead").and_then(letter);
    let trailing = field("trail").and_then(letter);

    Some(CoordinateGroup {
        degrees,
        minutes,
        seconds,
        leading,
        trailing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(input: &str) -> CoordinateGroup {
        match parse_coordinate_text(input) {
            Some(ParsedInput::Single(g)) => g,
            other => panic!("expected single group for {input:?}, got {other:?}"),
        }
    }

    fn pair(input: &str) -> (CoordinateGroup, CoordinateGroup) {
        match parse_coordinate_text(input) {
            Some(ParsedInput::Pair(a, b)) => (a, b),
            other => panic!("expected pair for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_decimal_degrees() {
        let g = single("40.7128");
        assert_eq!(g.degrees, 40.7128);
        assert_eq!(g.minutes, None);
        assert_eq!(g.seconds, None);
        assert_eq!(g.leading, None);
        assert_eq!(g.trailing, None);
    }

    #[test]
    fn test_negative_decimal_degrees() {
        let g = single("-74.0060");
        assert_eq!(g.degrees, -74.006);
    }

    #[test]
    fn test_trailing_hemisphere_letter() {
        let g = single("40.7128 N");
        assert_eq!(g.degrees, 40.7128);
        assert_eq!(g.trailing, Some(Hemisphere::North));
        assert_eq!(g.leading, None);
    }

    #[test]
    fn test_leading_hemisphere_letter() {
        let g = single("N 40.7128");
        assert_eq!(g.leading, Some(Hemisphere::North));
        assert_eq!(g.trailing, None);
    }

    #[test]
    fn test_degrees_minutes_seconds_unicode_marks() {
        let g = single("40° 42′ 46.08″ N");
        assert_eq!(g.degrees, 40.0);
        assert_eq!(g.minutes, Some(42.0));
        assert_eq!(g.seconds, Some(46.08));
        assert_eq!(g.trailing, Some(Hemisphere::North));
    }

    #[test]
    fn test_ascii_marks() {
        // D for degrees, m for minutes, s for seconds
        let g = single("40D 42m 46.08s N");
        assert_eq!(g.degrees, 40.0);
        assert_eq!(g.minutes, Some(42.0));
        assert_eq!(g.seconds, Some(46.08));
    }

    #[test]
    fn test_star_degree_mark_and_quotes() {
        let g = single("40* 42' 46.08\" N");
        assert_eq!(g.minutes, Some(42.0));
        assert_eq!(g.seconds, Some(46.08));
    }

    #[test]
    fn test_doubled_apostrophe_seconds() {
        let g = single("40° 42' 46.08'' N");
        assert_eq!(g.seconds, Some(46.08));
    }

    #[test]
    fn test_space_as_degree_mark() {
        let g = single("40 42.5");
        assert_eq!(g.degrees, 40.0);
        assert_eq!(g.minutes, Some(42.5));
    }

    #[test]
    fn test_pair_comma_separated() {
        let (a, b) = pair("40.7128 N, 74.0060 W");
        assert_eq!(a.degrees, 40.7128);
        assert_eq!(a.trailing, Some(Hemisphere::North));
        assert_eq!(b.degrees, 74.006);
        assert_eq!(b.trailing, Some(Hemisphere::West));
    }

    #[test]
    fn test_pair_other_delimiters() {
        for input in ["40.5; -74.0", "40.5 / -74.0", "40.5 -74.0"] {
            let (a, b) = pair(input);
            assert_eq!(a.degrees, 40.5, "{input}");
            assert_eq!(b.degrees, -74.0, "{input}");
        }
    }

    #[test]
    fn test_parenthesized_pair() {
        let (a, b) = pair("(40.7128, -74.0060)");
        assert_eq!(a.degrees, 40.7128);
        assert_eq!(b.degrees, -74.006);
    }

    #[test]
    fn test_both_letters_still_captured() {
        // Grammar captures both; the validator rejects the combination.
        let g = single("N 40.7128 S");
        assert_eq!(g.leading, Some(Hemisphere::North));
        assert_eq!(g.trailing, Some(Hemisphere::South));
    }

    #[test]
    fn test_leading_junk_tolerated() {
        let g = single("location: 40.7128");
        assert_eq!(g.degrees, 40.7128);
    }

    #[test]
    fn test_trailing_junk_rejected() {
        assert_eq!(parse_coordinate_text("40.7128 pizza"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse_coordinate_text("not a coordinate"), None);
        assert_eq!(parse_coordinate_text(""), None);
        assert_eq!(parse_coordinate_text("NSEW"), None);
    }

    #[test]
    fn test_trailing_whitespace_tolerated() {
        let g = single("  40.7128 N  ");
        assert_eq!(g.degrees, 40.7128);
        assert_eq!(g.trailing, Some(Hemisphere::North));
    }
}
