//! Semantic validation of parsed coordinate groups
//!
//! Consumes the grammar's capture groups and applies the range and
//! consistency rules: minutes/seconds in [0, 60), at most one hemisphere
//! letter per group, no letter together with negative degrees, axis-dependent
//! bounds. Missing hemispheres are inferred from sign — via the caller's
//! axis for a single coordinate, positionally for a pair.

use crate::coord::{CleanCoordinate, CoordinateGroup, Hemisphere, HorizontalAxis};
use crate::error::CleanError;

/// Decimal-degree magnitude of a group: absolute degrees plus the
/// minute/second fractions. The sign lives in the hemisphere (explicit or
/// inferred), never in the returned value.
fn magnitude(group: &CoordinateGroup) -> f64 {
    group.degrees.abs() + group.minutes_or_zero() / 60.0 + group.seconds_or_zero() / 3600.0
}

/// Negativity of the raw degrees as written. `-0` counts as non-negative,
/// matching the inference rule "non-negative maps to North/East".
fn is_negative(group: &CoordinateGroup) -> bool {
    group.degrees < 0.0
}

/// Field checks shared by both flows: sexagesimal ranges and hemisphere
/// consistency. When `axis` is given, an explicit letter must belong to that
/// axis (used by the pair flow, where position fixes the axis).
///
/// Returns the effective explicit hemisphere, if any.
fn check_group(
    group: &CoordinateGroup,
    axis: Option<HorizontalAxis>,
) -> Result<Option<Hemisphere>, CleanError> {
    let minutes = group.minutes_or_zero();
    if !(0.0..60.0).contains(&minutes) {
        return Err(CleanError::sexagesimal("minutes", minutes));
    }
    let seconds = group.seconds_or_zero();
    if !(0.0..60.0).contains(&seconds) {
        return Err(CleanError::sexagesimal("seconds", seconds));
    }

    if group.leading.is_some() && group.trailing.is_some() {
        return Err(CleanError::hemisphere(
            "hemisphere letter given both before and after the coordinate",
        ));
    }

    let hemisphere = group.hemisphere();
    if let Some(h) = hemisphere {
        // Sign belongs to the letter when one is present.
        if is_negative(group) {
            return Err(CleanError::hemisphere(format!(
                "negative degrees {} combined with hemisphere {h}",
                group.degrees
            )));
        }
        if let Some(axis) = axis {
            if !axis.admits(h) {
                return Err(CleanError::hemisphere(format!(
                    "hemisphere {h} is not a {axis} hemisphere"
                )));
            }
        }
    }

    Ok(hemisphere)
}

/// Validate a single (unpaired) coordinate group against the caller's axis.
pub fn validate_single(
    group: &CoordinateGroup,
    axis: HorizontalAxis,
) -> Result<CleanCoordinate, CleanError> {
    let explicit = check_group(group, None)?;
    let hemisphere = explicit.unwrap_or_else(|| axis.hemisphere_for_sign(is_negative(group)));

    if !axis.admits(hemisphere) {
        return Err(CleanError::hemisphere(format!(
            "hemisphere {hemisphere} is not a {axis} hemisphere"
        )));
    }

    let magnitude = magnitude(group);
    if magnitude > axis.max_degrees() {
        return Err(CleanError::out_of_bounds(
            match axis {
                HorizontalAxis::Latitude => "latitude",
                HorizontalAxis::Longitude => "longitude",
            },
            magnitude,
            axis.max_degrees(),
        ));
    }

    Ok(CleanCoordinate::new(magnitude, hemisphere))
}

/// Validate a latitude/longitude pair. Order fixes the axes: the first group
/// is latitude, the second longitude; no caller axis is needed.
pub fn validate_pair(
    first: &CoordinateGroup,
    second: &CoordinateGroup,
) -> Result<(CleanCoordinate, CleanCoordinate), CleanError> {
    let lat_explicit = check_group(first, Some(HorizontalAxis::Latitude))?;
    let lon_explicit = check_group(second, Some(HorizontalAxis::Longitude))?;

    let lat_hemisphere = lat_explicit
        .unwrap_or_else(|| HorizontalAxis::Latitude.hemisphere_for_sign(is_negative(first)));
    let lon_hemisphere = lon_explicit
        .unwrap_or_else(|| HorizontalAxis::Longitude.hemisphere_for_sign(is_negative(second)));

    let lat = magnitude(first);
    if lat > 90.0 {
        return Err(CleanError::out_of_bounds("latitude", lat, 90.0));
    }
    let lon = magnitude(second);
    if lon > 180.0 {
        return Err(CleanError::out_of_bounds("longitude", lon, 180.0));
    }

    Ok((
        CleanCoordinate::new(lat, lat_hemisphere),
        CleanCoordinate::new(lon, lon_hemisphere),
    ))
}
