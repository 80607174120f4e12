//! Coordinate domain types
//!
//! The capture, validation and output types shared by the grammar,
//! the semantic validator and the formatter.

pub mod format;
pub mod grammar;
pub mod validate;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CleanError;

/// Unicode degree sign used in rendered output.
pub const DEGREE_SIGN: char = '\u{00B0}';
/// Unicode prime (minutes mark) used in rendered output.
pub const PRIME: char = '\u{2032}';
/// Unicode double prime (seconds mark) used in rendered output.
pub const DOUBLE_PRIME: char = '\u{2033}';

/// One of the four hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Map a hemisphere letter to its variant. Only `N`, `S`, `E`, `W`
    /// (uppercase) are valid; the grammar never captures anything else.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// The single-letter form used in rendered output.
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// Sign factor implied by this hemisphere: -1 for South/West, +1 otherwise.
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }

    /// True for North and South.
    pub fn is_latitudinal(&self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }

    /// True for East and West.
    pub fn is_longitudinal(&self) -> bool {
        matches!(self, Hemisphere::East | Hemisphere::West)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which axis a single (unpaired) coordinate belongs to.
///
/// Needed only when the input carries one coordinate group and no hemisphere
/// letter: the axis decides both the inferred hemisphere and the bound check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorizontalAxis {
    #[default]
    Latitude,
    Longitude,
}

impl HorizontalAxis {
    /// Maximum absolute degree value on this axis.
    pub fn max_degrees(&self) -> f64 {
        match self {
            HorizontalAxis::Latitude => 90.0,
            HorizontalAxis::Longitude => 180.0,
        }
    }

    /// Hemisphere implied by a value's sign on this axis.
    pub fn hemisphere_for_sign(&self, negative: bool) -> Hemisphere {
        match (self, negative) {
            (HorizontalAxis::Latitude, false) => Hemisphere::North,
            (HorizontalAxis::Latitude, true) => Hemisphere::South,
            (HorizontalAxis::Longitude, false) => Hemisphere::East,
            (HorizontalAxis::Longitude, true) => Hemisphere::West,
        }
    }

    /// True if a hemisphere letter is admissible on this axis.
    pub fn admits(&self, hemisphere: Hemisphere) -> bool {
        match self {
            HorizontalAxis::Latitude => hemisphere.is_latitudinal(),
            HorizontalAxis::Longitude => hemisphere.is_longitudinal(),
        }
    }
}

impl fmt::Display for HorizontalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizontalAxis::Latitude => write!(f, "latitude"),
            HorizontalAxis::Longitude => write!(f, "longitude"),
        }
    }
}

impl FromStr for HorizontalAxis {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lat" | "latitude" => Ok(HorizontalAxis::Latitude),
            "long" | "lon" | "longitude" => Ok(HorizontalAxis::Longitude),
            other => Err(CleanError::GrammarMismatch {
                input: other.to_string(),
            }),
        }
    }
}

/// Canonical output encoding for a cleaned coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Signed decimal degrees rounded to 4 decimals (`-74.006`).
    #[default]
    DecimalDegrees,
    /// Magnitude, degree sign and hemisphere letter (`74.006° W`).
    DecimalDegreesWithHemisphere,
    /// Integer degrees plus decimal minutes (`74° 0.36′ W`).
    DegreesMinutes,
    /// Integer degrees and minutes plus decimal seconds (`74° 0′ 21.6″ W`).
    DegreesMinutesSeconds,
}

impl OutputFormat {
    /// Short alias used in config files and the original tool (`dd`, `ddh`,
    /// `dm`, `dms`).
    pub fn alias(&self) -> &'static str {
        match self {
            OutputFormat::DecimalDegrees => "dd",
            OutputFormat::DecimalDegreesWithHemisphere => "ddh",
            OutputFormat::DegreesMinutes => "dm",
            OutputFormat::DegreesMinutesSeconds => "dms",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias())
    }
}

impl FromStr for OutputFormat {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dd" => Ok(OutputFormat::DecimalDegrees),
            "ddh" => Ok(OutputFormat::DecimalDegreesWithHemisphere),
            "dm" => Ok(OutputFormat::DegreesMinutes),
            "dms" => Ok(OutputFormat::DegreesMinutesSeconds),
            other => Err(CleanError::GrammarMismatch {
                input: other.to_string(),
            }),
        }
    }
}

/// One coordinate capture group produced by the lexical grammar.
///
/// Lives only for the duration of a single parse/validate cycle. Minutes and
/// seconds are `None` when the corresponding field did not appear in the
/// input; the validator treats absence as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateGroup {
    /// Raw signed degree value as written.
    pub degrees: f64,
    /// Decimal minutes, if present.
    pub minutes: Option<f64>,
    /// Decimal seconds, if present.
    pub seconds: Option<f64>,
    /// Hemisphere letter written before the numbers.
    pub leading: Option<Hemisphere>,
    /// Hemisphere letter written after the numbers.
    pub trailing: Option<Hemisphere>,
}

impl CoordinateGroup {
    /// Bare decimal-degree group with no minutes, seconds or letters.
    pub fn from_degrees(degrees: f64) -> Self {
        CoordinateGroup {
            degrees,
            ..Default::default()
        }
    }

    /// The effective hemisphere letter: the trailing one wins when both are
    /// written (validation rejects that case before it matters).
    pub fn hemisphere(&self) -> Option<Hemisphere> {
        self.trailing.or(self.leading)
    }

    /// Minutes with absence defaulted to zero.
    pub fn minutes_or_zero(&self) -> f64 {
        self.minutes.unwrap_or(0.0)
    }

    /// Seconds with absence defaulted to zero.
    pub fn seconds_or_zero(&self) -> f64 {
        self.seconds.unwrap_or(0.0)
    }
}

/// Result of a successful grammar match: one coordinate or a
/// latitude/longitude pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    Single(CoordinateGroup),
    Pair(CoordinateGroup, CoordinateGroup),
}

/// A validated coordinate: unsigned magnitude plus resolved hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanCoordinate {
    /// Absolute decimal degrees, within the axis bound.
    pub magnitude: f64,
    /// Resolved hemisphere (explicit letter, or inferred from sign and axis).
    pub hemisphere: Hemisphere,
}

impl CleanCoordinate {
    pub fn new(magnitude: f64, hemisphere: Hemisphere) -> Self {
        CleanCoordinate {
            magnitude,
            hemisphere,
        }
    }

    /// Signed decimal degrees: negative for South and West.
    pub fn signed(&self) -> f64 {
        self.hemisphere.sign() * self.magnitude
    }
}

/// The value carried by a successful cleaning, shaped by the output format
/// and split mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CleanedValue {
    /// Single coordinate, decimal degrees: one signed number.
    Degrees(f64),
    /// Single coordinate in a textual format, or a joined pair.
    Text(String),
    /// Pair in decimal degrees without split: `(latitude, longitude)`.
    DegreesPair(f64, f64),
    /// Pair in decimal degrees with split: two numeric fields.
    SplitDegrees { latitude: f64, longitude: f64 },
    /// Pair in a textual format with split: two string fields.
    SplitText { latitude: String, longitude: String },
}

impl fmt::Display for CleanedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanedValue::Degrees(d) => write!(f, "{d}"),
            CleanedValue::Text(s) => write!(f, "{s}"),
            CleanedValue::DegreesPair(lat, lon) => write!(f, "({lat}, {lon})"),
            CleanedValue::SplitDegrees {
                latitude,
                longitude,
            } => write!(f, "{latitude}, {longitude}"),
            CleanedValue::SplitText {
                latitude,
                longitude,
            } => write!(f, "{latitude}, {longitude}"),
        }
    }
}

/// Per-row result of the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CleaningOutcome {
    /// The row parsed and validated; the value is the canonical rendering.
    Cleaned(CleanedValue),
    /// The row matched the configured null-value set.
    Null,
    /// The row failed the grammar or a semantic rule.
    Unparseable,
    /// Ignore policy only: the original text passed through untouched.
    Unchanged(String),
}

impl CleaningOutcome {
    pub fn is_cleaned(&self) -> bool {
        matches!(self, CleaningOutcome::Cleaned(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CleaningOutcome::Null)
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, CleaningOutcome::Unparseable)
    }

    /// The cleaned value, if any.
    pub fn cleaned(&self) -> Option<&CleanedValue> {
        match self {
            CleaningOutcome::Cleaned(v) => Some(v),
            _ => None,
        }
    }
}
