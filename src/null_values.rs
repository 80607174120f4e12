//! Configurable null-value set
//!
//! Cells that mean "no data" come in many spellings. The default set covers
//! the common ones (spreadsheet `#N/A` variants, `NULL`, `NaN`, the empty
//! string, the `-1.#IND`/`1.#QNAN` printf artifacts). Membership is tested
//! on the raw untrimmed string; a padded `" NA "` is not a null marker and
//! falls through to the grammar instead.

use std::collections::HashSet;

/// The default null-value spellings.
pub const DEFAULT_NULL_VALUES: &[&str] = &[
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "n/a",
    "nan",
    "null",
];

/// Set of strings treated as missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullValues {
    values: HashSet<String>,
}

impl Default for NullValues {
    fn default() -> Self {
        NullValues {
            values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NullValues {
    /// The default spelling set.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set: nothing short-circuits to `Null`.
    pub fn none() -> Self {
        NullValues {
            values: HashSet::new(),
        }
    }

    /// Build a set from explicit spellings only.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NullValues {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a spelling to the set.
    pub fn insert(&mut self, value: impl Into<String>) {
        self.values.insert(value.into());
    }

    /// Remove a spelling from the set.
    pub fn remove(&mut self, value: &str) {
        self.values.remove(value);
    }

    /// True if the raw cell text is a null marker.
    pub fn is_null(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Number of configured spellings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
