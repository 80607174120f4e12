//! Invalid-value policy
//!
//! Controls what a failed row turns into. `Coerce` (the default) replaces it
//! with the null outcome; `Ignore` passes the original text through
//! unchanged. Either way the statistics counters record the failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CleanError;

/// What to do with rows that fail parsing or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvalidPolicy {
    /// Replace unparseable rows with the null outcome.
    #[default]
    Coerce,

    /// Keep the original text for unparseable rows.
    Ignore,
}

impl InvalidPolicy {
    /// True if failed rows are coerced to null.
    pub fn is_coerce(&self) -> bool {
        matches!(self, InvalidPolicy::Coerce)
    }

    /// True if failed rows keep their original text.
    pub fn is_ignore(&self) -> bool {
        matches!(self, InvalidPolicy::Ignore)
    }
}

impl fmt::Display for InvalidPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPolicy::Coerce => write!(f, "coerce"),
            InvalidPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

impl FromStr for InvalidPolicy {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coerce" => Ok(InvalidPolicy::Coerce),
            "ignore" => Ok(InvalidPolicy::Ignore),
            other => Err(CleanError::GrammarMismatch {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_coerce() {
        assert_eq!(InvalidPolicy::default(), InvalidPolicy::Coerce);
        assert!(InvalidPolicy::Coerce.is_coerce());
        assert!(!InvalidPolicy::Coerce.is_ignore());
        assert!(InvalidPolicy::Ignore.is_ignore());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(InvalidPolicy::Coerce.to_string(), "coerce");
        assert_eq!(InvalidPolicy::Ignore.to_string(), "ignore");
        assert_eq!("coerce".parse::<InvalidPolicy>().unwrap(), InvalidPolicy::Coerce);
        assert_eq!("ignore".parse::<InvalidPolicy>().unwrap(), InvalidPolicy::Ignore);
        assert!("drop".parse::<InvalidPolicy>().is_err());
    }
}
