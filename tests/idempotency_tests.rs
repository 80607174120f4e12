//! Idempotency tests
//!
//! Feeding a cleaned value back through the cleaner must reproduce it
//! exactly, for every output format.

use geoclean::{CleanConfig, CleanedValue, Cleaner, CleaningOutcome, OutputFormat};

fn clean_once(cleaner: &Cleaner, input: &str) -> CleanedValue {
    match cleaner.clean(&[input]).outcomes.remove(0) {
        CleaningOutcome::Cleaned(value) => value,
        other => panic!("expected cleaned value for {input:?}, got {other:?}"),
    }
}

fn assert_idempotent(format: OutputFormat, inputs: &[&str]) {
    let cleaner = Cleaner::with_config(CleanConfig::new().output_format(format));
    for input in inputs {
        let first = clean_once(&cleaner, input);
        let rendered = first.to_string();
        let second = clean_once(&cleaner, &rendered);
        assert_eq!(first, second, "not idempotent for {input:?} via {rendered:?}");
    }
}

const MESSY_INPUTS: &[&str] = &[
    "40.7128",
    "-74.0060 ",
    "40\u{00B0} 42\u{2032} 46\u{2033} N",
    "23 26m 22s N",
    "40* 26' 46'' N",
    "0",
    "89.9999 S",
];

#[test]
fn test_decimal_degrees_idempotent() {
    assert_idempotent(OutputFormat::DecimalDegrees, MESSY_INPUTS);
}

#[test]
fn test_ddh_idempotent() {
    assert_idempotent(OutputFormat::DecimalDegreesWithHemisphere, MESSY_INPUTS);
}

#[test]
fn test_dm_idempotent() {
    assert_idempotent(OutputFormat::DegreesMinutes, MESSY_INPUTS);
}

#[test]
fn test_dms_idempotent() {
    assert_idempotent(OutputFormat::DegreesMinutesSeconds, MESSY_INPUTS);
}

#[test]
fn test_second_pass_counts_nothing_cleaned() {
    let cleaner = Cleaner::with_config(
        CleanConfig::new().output_format(OutputFormat::DecimalDegreesWithHemisphere),
    );
    let messy: Vec<&str> = MESSY_INPUTS.to_vec();
    let first = cleaner.clean(&messy);
    let rendered: Vec<String> = first
        .outcomes
        .iter()
        .map(|o| o.cleaned().expect("all inputs clean").to_string())
        .collect();
    let second = cleaner.clean(&rendered);
    assert_eq!(second.stats.cleaned, 0);
    assert_eq!(second.stats.rows, rendered.len() as u64);
}

#[test]
fn test_pair_idempotent_in_text_formats() {
    let cleaner = Cleaner::with_config(
        CleanConfig::new().output_format(OutputFormat::DecimalDegreesWithHemisphere),
    );
    let first = clean_once(&cleaner, "40.7128 N, 74.0060 W");
    let rendered = first.to_string();
    let second = clean_once(&cleaner, &rendered);
    assert_eq!(first, second);
}
