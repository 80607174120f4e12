//! Parallel processing support for geoclean
//!
//! This module provides parallel variants of parsing and cleaning
//! operations using rayon. Enable with the `parallel` feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use geoclean::parallel::{clean_parallel, parse_parallel};
//! use geoclean::{CleanConfig, Cleaner};
//!
//! let rows = vec![
//!     "40.7128 N, 74.0060 W",
//!     "51° 30′ 26″ N",
//!     "-33.8688",
//! ];
//!
//! // Parse in parallel
//! let parsed: Vec<_> = parse_parallel(&rows)
//!     .into_iter()
//!     .flatten()
//!     .collect();
//!
//! // Clean in parallel
//! let cleaner = Cleaner::with_config(CleanConfig::new().split(true));
//! let result = clean_parallel(&cleaner, &rows);
//! assert_eq!(result.total(), 3);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use std::time::Instant;

use rayon::prelude::*;

use crate::batch::{CleanResult, Cleaner, CleaningStats};
use crate::coord::grammar::parse_coordinate_text;
use crate::coord::ParsedInput;

/// Parse multiple coordinate strings in parallel
///
/// Returns one entry per input string, `None` where the grammar did not
/// match. Order is preserved.
pub fn parse_parallel<S: AsRef<str> + Sync>(rows: &[S]) -> Vec<Option<ParsedInput>> {
    rows.par_iter()
        .map(|s| parse_coordinate_text(s.as_ref()))
        .collect()
}

/// Parse multiple coordinate strings in parallel, dropping non-matches
///
/// Returns only inputs the grammar accepted. Useful when you want to
/// skip malformed rows without error handling.
pub fn parse_parallel_ok<S: AsRef<str> + Sync>(rows: &[S]) -> Vec<ParsedInput> {
    rows.par_iter()
        .filter_map(|s| parse_coordinate_text(s.as_ref()))
        .collect()
}

/// Clean multiple rows in parallel
///
/// Equivalent to [`Cleaner::clean`] with the work spread across the rayon
/// thread pool. Outcomes come back in input order and per-worker counter
/// partials merge into a single [`CleaningStats`].
pub fn clean_parallel<S: AsRef<str> + Sync>(cleaner: &Cleaner, rows: &[S]) -> CleanResult {
    let start = Instant::now();

    let per_row: Vec<_> = rows
        .par_iter()
        .map(|row| cleaner.clean_row(row.as_ref()))
        .collect();

    let mut stats = CleaningStats::new();
    let mut outcomes = Vec::with_capacity(per_row.len());
    for (outcome, disposition) in per_row {
        stats.record(disposition);
        outcomes.push(outcome);
    }

    CleanResult::new(outcomes, stats, start.elapsed())
}

/// Validate multiple rows in parallel
///
/// Returns one boolean per input, in order.
pub fn validate_parallel<S: AsRef<str> + Sync>(cleaner: &Cleaner, rows: &[S]) -> Vec<bool> {
    rows.par_iter().map(|s| cleaner.validate(s.as_ref())).collect()
}
