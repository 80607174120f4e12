//! Batch cleaning of coordinate columns.
//!
//! This module provides the row-at-a-time cleaning engine plus the
//! column-level entry points: [`clean_coordinates`] for cleaning a sequence
//! of raw cells and [`validate_coordinate`] for a boolean validity check.
//! The statistics accumulator is created per run and returned with the
//! outcomes; there is no hidden global state.

mod processor;

pub use processor::{
    CleanConfig, CleanProgress, CleanResult, Cleaner, CleaningStats,
};

use crate::coord::{CleaningOutcome, HorizontalAxis, OutputFormat};

/// Clean a sequence of raw coordinate cells.
///
/// Convenience wrapper over [`Cleaner`] with the default null-value set and
/// coerce policy. One outcome is produced per input row, in order.
///
/// # Example
///
/// ```
/// use geoclean::{clean_coordinates, CleaningOutcome, CleanedValue, HorizontalAxis, OutputFormat};
///
/// let rows = ["40.7128", "NA", "not a coordinate"];
/// let outcomes = clean_coordinates(&rows, OutputFormat::DecimalDegrees, false, HorizontalAxis::Latitude);
///
/// assert_eq!(outcomes[0], CleaningOutcome::Cleaned(CleanedValue::Degrees(40.7128)));
/// assert_eq!(outcomes[1], CleaningOutcome::Null);
/// assert_eq!(outcomes[2], CleaningOutcome::Unparseable);
/// ```
pub fn clean_coordinates<S: AsRef<str>>(
    rows: &[S],
    output_format: OutputFormat,
    split: bool,
    horizontal_axis: HorizontalAxis,
) -> Vec<CleaningOutcome> {
    let cleaner = Cleaner::with_config(
        CleanConfig::new()
            .output_format(output_format)
            .split(split)
            .horizontal_axis(horizontal_axis),
    );
    cleaner.clean(rows).outcomes
}

/// Check whether one cell is a valid coordinate on the given axis.
///
/// Null markers are not valid coordinates. A paired cell validates both
/// components positionally and ignores the axis argument.
///
/// # Example
///
/// ```
/// use geoclean::{validate_coordinate, HorizontalAxis};
///
/// assert!(validate_coordinate("90 N", HorizontalAxis::Latitude));
/// assert!(!validate_coordinate("90.0001 N", HorizontalAxis::Latitude));
/// assert!(validate_coordinate("180 E", HorizontalAxis::Longitude));
/// ```
pub fn validate_coordinate(value: &str, horizontal_axis: HorizontalAxis) -> bool {
    Cleaner::with_config(CleanConfig::new().horizontal_axis(horizontal_axis)).validate(value)
}
