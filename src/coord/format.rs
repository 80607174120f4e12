//! Canonical rendering of validated coordinates
//!
//! All formats round to 4 decimal places. Textual formats use the Unicode
//! degree/prime/double-prime marks and a trailing hemisphere letter; minute
//! and second values that come out exactly whole are printed as integers.

use crate::coord::{CleanCoordinate, OutputFormat, DEGREE_SIGN, DOUBLE_PRIME, PRIME};

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Signed decimal degrees rounded to 4 places: the `DecimalDegrees` payload.
pub fn signed_degrees(coord: &CleanCoordinate) -> f64 {
    round4(coord.signed())
}

/// Print a rounded value as an integer when it is exactly whole, otherwise
/// in the shortest form that round-trips.
fn trim_whole(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Render one coordinate in the requested textual/decimal format.
///
/// For `DecimalDegrees` this is the string form of [`signed_degrees`]; batch
/// callers use the numeric value directly and only hit this through joined
/// pair output or `Display`.
pub fn format_coordinate(coord: &CleanCoordinate, format: OutputFormat) -> String {
    let magnitude = coord.magnitude;
    let hemisphere = coord.hemisphere;
    match format {
        OutputFormat::DecimalDegrees => trim_whole(signed_degrees(coord)),
        OutputFormat::DecimalDegreesWithHemisphere => {
            format!("{}{DEGREE_SIGN} {hemisphere}", trim_whole(round4(magnitude)))
        }
        OutputFormat::DegreesMinutes => {
            let whole = magnitude.trunc();
            let minutes = round4(60.0 * (magnitude - whole));
            format!(
                "{}{DEGREE_SIGN} {}{PRIME} {hemisphere}",
                whole as i64,
                trim_whole(minutes)
            )
        }
        OutputFormat::DegreesMinutesSeconds => {
            let whole = magnitude.trunc();
            let minutes = (60.0 * (magnitude - whole)).trunc();
            let seconds = round4(3600.0 * (magnitude - whole) - 60.0 * minutes);
            format!(
                "{}{DEGREE_SIGN} {}{PRIME} {}{DOUBLE_PRIME} {hemisphere}",
                whole as i64,
                minutes as i64,
                trim_whole(seconds)
            )
        }
    }
}
