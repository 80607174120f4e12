//! Human-readable summary of a cleaning run.

use std::fmt;

use crate::batch::CleaningStats;

/// Text summary of one cleaning run, built from its statistics.
///
/// The `Display` rendering is the report itself:
///
/// ```text
/// Latitude and Longitude Cleaning Report:
///     5 values cleaned (50%)
///     2 values unable to be parsed (20%), set to NaN
/// Result contains 6 (60%) values in the correct format and 2 null values (20%)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CleaningReport {
    stats: CleaningStats,
}

impl CleaningReport {
    pub fn new(stats: CleaningStats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &CleaningStats {
        &self.stats
    }

    /// Rows that ended up holding a usable coordinate.
    pub fn correct(&self) -> u64 {
        self.stats.rows - self.stats.null - self.stats.unknown
    }

    fn percent(&self, count: u64) -> f64 {
        if self.stats.rows == 0 {
            0.0
        } else {
            round2(count as f64 / self.stats.rows as f64 * 100.0)
        }
    }
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Latitude and Longitude Cleaning Report:")?;
        if self.stats.cleaned > 0 {
            writeln!(
                f,
                "\t{} values cleaned ({}%)",
                self.stats.cleaned,
                Percent(self.percent(self.stats.cleaned))
            )?;
        }
        if self.stats.unknown > 0 {
            writeln!(
                f,
                "\t{} values unable to be parsed ({}%), set to NaN",
                self.stats.unknown,
                Percent(self.percent(self.stats.unknown))
            )?;
        }
        write!(
            f,
            "Result contains {} ({}%) values in the correct format and {} null values ({}%)",
            self.correct(),
            Percent(self.percent(self.correct())),
            self.stats.null,
            Percent(self.percent(self.stats.null))
        )
    }
}

/// Percentage rendered without a trailing ".0" on whole values.
struct Percent(f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
