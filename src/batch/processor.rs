//! Batch processor implementation.

use std::time::{Duration, Instant};

use crate::coord::format::{format_coordinate, signed_degrees};
use crate::coord::grammar::parse_coordinate_text;
use crate::coord::validate::{validate_pair, validate_single};
use crate::coord::{
    CleanCoordinate, CleanedValue, CleaningOutcome, HorizontalAxis, OutputFormat, ParsedInput,
};
use crate::error::{CleanError, FailureBucket};
use crate::null_values::NullValues;
use crate::policy::InvalidPolicy;
use crate::report::CleaningReport;

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Default)]
pub struct CleanConfig {
    /// Canonical output encoding.
    pub output_format: OutputFormat,
    /// Emit paired coordinates as two discrete fields.
    pub split: bool,
    /// Axis assumed for single (unpaired) coordinates.
    pub horizontal_axis: HorizontalAxis,
    /// What failed rows turn into.
    pub policy: InvalidPolicy,
    /// Strings treated as missing values.
    pub null_values: NullValues,
    /// Call the progress callback every N rows (0 means never).
    pub progress_interval: usize,
}

impl CleanConfig {
    /// Defaults: decimal degrees, no split, latitude axis, coerce policy,
    /// the standard null-value set, progress every 100 rows.
    pub fn new() -> Self {
        Self {
            progress_interval: 100,
            ..Default::default()
        }
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    pub fn horizontal_axis(mut self, axis: HorizontalAxis) -> Self {
        self.horizontal_axis = axis;
        self
    }

    pub fn policy(mut self, policy: InvalidPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn null_values(mut self, null_values: NullValues) -> Self {
        self.null_values = null_values;
        self
    }

    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }
}

/// Counters for one cleaning run. Created at the start of a run, filled
/// while it proceeds, returned to the caller; partial accumulators from
/// parallel workers combine with [`CleaningStats::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CleaningStats {
    /// Rows whose rendered value differs from the raw text.
    pub cleaned: u64,
    /// Rows matching the null-value set.
    pub null: u64,
    /// Rows that failed the grammar or a semantic rule.
    pub unknown: u64,
    /// Total rows seen.
    pub rows: u64,
}

impl CleaningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &CleaningStats) {
        self.cleaned += other.cleaned;
        self.null += other.null;
        self.unknown += other.unknown;
        self.rows += other.rows;
    }

    /// Rows that produced no usable value: null plus unknown.
    pub fn failed(&self) -> u64 {
        self.null + self.unknown
    }

    pub(crate) fn record(&mut self, disposition: RowDisposition) {
        self.rows += 1;
        match disposition {
            RowDisposition::Changed => self.cleaned += 1,
            RowDisposition::AlreadyClean => {}
            RowDisposition::Null => self.null += 1,
            RowDisposition::Unknown => self.unknown += 1,
        }
    }
}

/// How one row affected the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowDisposition {
    Changed,
    AlreadyClean,
    Null,
    Unknown,
}

/// Progress information for long cleaning runs.
#[derive(Debug, Clone)]
pub struct CleanProgress {
    /// Total rows in the run.
    pub total: usize,
    /// Rows processed so far.
    pub processed: usize,
    /// Accumulator state so far.
    pub stats: CleaningStats,
    /// Time elapsed since the run started.
    pub elapsed: Duration,
}

impl CleanProgress {
    /// Completion percentage.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.processed as f64 / self.total as f64) * 100.0
        }
    }

    /// Processing rate; 0.0 until any time has elapsed.
    pub fn rows_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs < f64::EPSILON {
            0.0
        } else {
            self.processed as f64 / secs
        }
    }
}

/// Result of one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Per-row outcomes, in input order.
    pub outcomes: Vec<CleaningOutcome>,
    /// The run's statistics accumulator.
    pub stats: CleaningStats,
    /// Total processing time.
    pub duration: Duration,
}

impl CleanResult {
    pub fn new(outcomes: Vec<CleaningOutcome>, stats: CleaningStats, duration: Duration) -> Self {
        Self {
            outcomes,
            stats,
            duration,
        }
    }

    /// Total rows processed.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Human-readable summary of the run.
    pub fn report(&self) -> CleaningReport {
        CleaningReport::new(self.stats)
    }

    /// Processing rate; 0.0 when the run was too short to measure.
    pub fn rows_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs < f64::EPSILON {
            0.0
        } else {
            self.outcomes.len() as f64 / secs
        }
    }
}

/// Row-at-a-time cleaning engine.
///
/// Pure computation over one string at a time: a `Cleaner` holds only its
/// configuration, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    config: CleanConfig,
}

impl Cleaner {
    /// Cleaner with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CleanConfig::new())
    }

    pub fn with_config(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Clean a sequence of rows, producing one outcome per row plus the
    /// run's statistics.
    pub fn clean<S: AsRef<str>>(&self, rows: &[S]) -> CleanResult {
        self.clean_with_progress(rows, |_| {})
    }

    /// Clean with a progress callback invoked every `progress_interval`
    /// rows and once at the end.
    pub fn clean_with_progress<S, F>(&self, rows: &[S], mut progress_fn: F) -> CleanResult
    where
        S: AsRef<str>,
        F: FnMut(CleanProgress),
    {
        let start = Instant::now();
        let total = rows.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut stats = CleaningStats::new();

        for (i, row) in rows.iter().enumerate() {
            let (outcome, disposition) = self.clean_row(row.as_ref());
            stats.record(disposition);
            outcomes.push(outcome);

            let interval = self.config.progress_interval;
            if interval > 0 && ((i + 1) % interval == 0 || i + 1 == total) {
                progress_fn(CleanProgress {
                    total,
                    processed: i + 1,
                    stats,
                    elapsed: start.elapsed(),
                });
            }
        }

        CleanResult::new(outcomes, stats, start.elapsed())
    }

    /// Check one cell for validity without rendering it.
    pub fn validate(&self, value: &str) -> bool {
        if self.config.null_values.is_null(value) {
            return false;
        }
        match parse_coordinate_text(value) {
            Some(ParsedInput::Single(group)) => {
                validate_single(&group, self.config.horizontal_axis).is_ok()
            }
            Some(ParsedInput::Pair(first, second)) => validate_pair(&first, &second).is_ok(),
            None => false,
        }
    }

    /// Clean one row: outcome plus its effect on the counters.
    pub(crate) fn clean_row(&self, raw: &str) -> (CleaningOutcome, RowDisposition) {
        match self.try_clean(raw) {
            Ok(value) => {
                // A textual output identical to the input was already clean.
                let already = matches!(&value, CleanedValue::Text(s) if s == raw);
                let disposition = if already {
                    RowDisposition::AlreadyClean
                } else {
                    RowDisposition::Changed
                };
                (CleaningOutcome::Cleaned(value), disposition)
            }
            Err(err) => {
                let disposition = match err.bucket() {
                    FailureBucket::Null => RowDisposition::Null,
                    FailureBucket::Unknown => RowDisposition::Unknown,
                };
                let outcome = match (self.config.policy, err.bucket()) {
                    (InvalidPolicy::Ignore, _) => CleaningOutcome::Unchanged(raw.to_string()),
                    (InvalidPolicy::Coerce, FailureBucket::Null) => CleaningOutcome::Null,
                    (InvalidPolicy::Coerce, FailureBucket::Unknown) => {
                        CleaningOutcome::Unparseable
                    }
                };
                (outcome, disposition)
            }
        }
    }

    fn try_clean(&self, raw: &str) -> Result<CleanedValue, CleanError> {
        if self.config.null_values.is_null(raw) {
            return Err(CleanError::NullValue);
        }

        let parsed = parse_coordinate_text(raw).ok_or_else(|| CleanError::grammar(raw))?;
        match parsed {
            ParsedInput::Single(group) => {
                let coord = validate_single(&group, self.config.horizontal_axis)?;
                Ok(self.render_single(&coord))
            }
            ParsedInput::Pair(first, second) => {
                let (lat, lon) = validate_pair(&first, &second)?;
                Ok(self.render_pair(&lat, &lon))
            }
        }
    }

    fn render_single(&self, coord: &CleanCoordinate) -> CleanedValue {
        match self.config.output_format {
            OutputFormat::DecimalDegrees => CleanedValue::Degrees(signed_degrees(coord)),
            format => CleanedValue::Text(format_coordinate(coord, format)),
        }
    }

    fn render_pair(&self, lat: &CleanCoordinate, lon: &CleanCoordinate) -> CleanedValue {
        let format = self.config.output_format;
        match (self.config.split, format) {
            (true, OutputFormat::DecimalDegrees) => CleanedValue::SplitDegrees {
                latitude: signed_degrees(lat),
                longitude: signed_degrees(lon),
            },
            (true, _) => CleanedValue::SplitText {
                latitude: format_coordinate(lat, format),
                longitude: format_coordinate(lon, format),
            },
            (false, OutputFormat::DecimalDegrees) => {
                CleanedValue::DegreesPair(signed_degrees(lat), signed_degrees(lon))
            }
            (false, _) => CleanedValue::Text(format!(
                "{}, {}",
                format_coordinate(lat, format),
                format_coordinate(lon, format)
            )),
        }
    }
}
