//! Error types for geoclean
//!
//! The failure kinds mirror the cleaning pipeline: a row is either a
//! configured null marker, structurally unmatchable, numerically out of
//! range, or carries contradictory hemisphere information. Callers of the
//! batch API never see these directly — they collapse into the `Null` and
//! `Unparseable` outcomes — but they drive the null-vs-unknown statistics
//! split and make single-row validation errors debuggable.

use thiserror::Error;

/// Which statistics counter a failed row lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureBucket {
    /// Counted as `null`.
    Null,
    /// Counted as `unknown`.
    Unknown,
}

/// Main error type for geoclean operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CleanError {
    /// Input matched the configured null-value set.
    #[error("null value")]
    NullValue,

    /// No structural match: the input is not a coordinate at all, or the
    /// pattern matched without capturing a degree value.
    #[error("no coordinate structure in {input:?}")]
    GrammarMismatch { input: String },

    /// A minutes or seconds field fell outside the half-open sexagesimal
    /// range.
    #[error("{field} {value} outside [0, 60)")]
    SexagesimalRange { field: &'static str, value: f64 },

    /// A degree magnitude beyond the inclusive axis bound.
    #[error("{field} {value} outside [-{max}, {max}]")]
    DegreesOutOfBounds {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// Contradictory hemisphere information: two letters on one group, a
    /// letter on the wrong axis, or a letter combined with negative degrees.
    #[error("hemisphere conflict: {msg}")]
    HemisphereConflict { msg: String },
}

impl CleanError {
    /// Shorthand for a grammar mismatch on the given input.
    pub fn grammar(input: impl Into<String>) -> Self {
        CleanError::GrammarMismatch {
            input: input.into(),
        }
    }

    /// Shorthand for a hemisphere conflict.
    pub fn hemisphere(msg: impl Into<String>) -> Self {
        CleanError::HemisphereConflict { msg: msg.into() }
    }

    /// An out-of-range minutes or seconds field (`[0, 60)` interval).
    pub fn sexagesimal(field: &'static str, value: f64) -> Self {
        CleanError::SexagesimalRange { field, value }
    }

    /// A degree magnitude beyond the inclusive axis bound (`[-max, max]`).
    pub fn out_of_bounds(field: &'static str, value: f64, max: f64) -> Self {
        CleanError::DegreesOutOfBounds { field, value, max }
    }

    /// The statistics counter this failure belongs to.
    pub fn bucket(&self) -> FailureBucket {
        match self {
            CleanError::NullValue => FailureBucket::Null,
            _ => FailureBucket::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_split() {
        assert_eq!(CleanError::NullValue.bucket(), FailureBucket::Null);
        assert_eq!(CleanError::grammar("x").bucket(), FailureBucket::Unknown);
        assert_eq!(
            CleanError::sexagesimal("minutes", 61.0).bucket(),
            FailureBucket::Unknown
        );
        assert_eq!(
            CleanError::hemisphere("two letters").bucket(),
            FailureBucket::Unknown
        );
    }

    #[test]
    fn test_display_messages() {
        let err = CleanError::sexagesimal("seconds", 72.5);
        assert_eq!(err.to_string(), "seconds 72.5 outside [0, 60)");

        // Degree bounds are inclusive, sexagesimal bounds are not
        let err = CleanError::out_of_bounds("latitude", 95.0, 90.0);
        assert_eq!(err.to_string(), "latitude 95 outside [-90, 90]");

        let err = CleanError::out_of_bounds("longitude", 185.0, 180.0);
        assert_eq!(err.to_string(), "longitude 185 outside [-180, 180]");

        let err = CleanError::grammar("not a coordinate");
        assert!(err.to_string().contains("not a coordinate"));
    }
}
