//! Failure policy and null handling tests

use geoclean::{
    CleanConfig, CleanedValue, Cleaner, CleaningOutcome, InvalidPolicy, NullValues,
};

#[test]
fn test_coerce_maps_null_and_unknown_distinctly() {
    let cleaner = Cleaner::new();
    let result = cleaner.clean(&["NA", "gibberish", ""]);
    assert_eq!(result.outcomes[0], CleaningOutcome::Null);
    assert_eq!(result.outcomes[1], CleaningOutcome::Unparseable);
    assert_eq!(result.outcomes[2], CleaningOutcome::Null);
}

#[test]
fn test_ignore_keeps_original_text() {
    let cleaner = Cleaner::with_config(CleanConfig::new().policy(InvalidPolicy::Ignore));
    let result = cleaner.clean(&["gibberish", "NA", "200"]);
    assert_eq!(
        result.outcomes[0],
        CleaningOutcome::Unchanged("gibberish".to_string())
    );
    assert_eq!(result.outcomes[1], CleaningOutcome::Unchanged("NA".to_string()));
    // Out of range counts as unknown but the text survives
    assert_eq!(result.outcomes[2], CleaningOutcome::Unchanged("200".to_string()));
}

#[test]
fn test_stats_identical_across_policies() {
    let rows = ["40.5", "NA", "gibberish", "200"];
    let coerce = Cleaner::new().clean(&rows);
    let ignore = Cleaner::with_config(CleanConfig::new().policy(InvalidPolicy::Ignore)).clean(&rows);
    assert_eq!(coerce.stats, ignore.stats);
    assert_eq!(coerce.stats.cleaned, 1);
    assert_eq!(coerce.stats.null, 1);
    assert_eq!(coerce.stats.unknown, 2);
}

#[test]
fn test_default_null_spellings() {
    let cleaner = Cleaner::new();
    for value in ["", "NA", "N/A", "n/a", "null", "NULL", "NaN", "nan", "<NA>", "#N/A"] {
        let result = cleaner.clean(&[value]);
        assert_eq!(result.outcomes[0], CleaningOutcome::Null, "failed on {value:?}");
        assert_eq!(result.stats.null, 1, "failed on {value:?}");
    }
}

#[test]
fn test_null_check_is_exact() {
    // Membership is tested on the untrimmed cell
    let cleaner = Cleaner::new();
    let result = cleaner.clean(&[" NA "]);
    assert_eq!(result.outcomes[0], CleaningOutcome::Unparseable);
    assert_eq!(result.stats.unknown, 1);
}

#[test]
fn test_disabling_null_detection() {
    let cleaner = Cleaner::with_config(CleanConfig::new().null_values(NullValues::none()));
    let result = cleaner.clean(&["NA", ""]);
    assert_eq!(result.outcomes[0], CleaningOutcome::Unparseable);
    assert_eq!(result.outcomes[1], CleaningOutcome::Unparseable);
    assert_eq!(result.stats.null, 0);
    assert_eq!(result.stats.unknown, 2);
}

#[test]
fn test_cleaned_counter_skips_already_clean_rows() {
    use geoclean::{HorizontalAxis, OutputFormat};
    let cleaner = Cleaner::with_config(
        CleanConfig::new()
            .output_format(OutputFormat::DecimalDegreesWithHemisphere)
            .horizontal_axis(HorizontalAxis::Latitude),
    );
    let result = cleaner.clean(&["40.7128\u{00B0} N", "40.7128"]);
    // First row already in the target format, second row needed rewriting
    assert_eq!(
        result.outcomes[0],
        CleaningOutcome::Cleaned(CleanedValue::Text("40.7128\u{00B0} N".to_string()))
    );
    assert_eq!(result.stats.cleaned, 1);
}

#[test]
fn test_report_text() {
    let cleaner = Cleaner::new();
    let result = cleaner.clean(&["40.5", "1.5", "NA", "gibberish", "200"]);
    let report = result.report().to_string();
    assert_eq!(
        report,
        "Latitude and Longitude Cleaning Report:\n\
         \t2 values cleaned (40%)\n\
         \t2 values unable to be parsed (40%), set to NaN\n\
         Result contains 2 (40%) values in the correct format and 1 null values (20%)"
    );
}

#[test]
fn test_policy_parsing() {
    assert_eq!("coerce".parse::<InvalidPolicy>().unwrap(), InvalidPolicy::Coerce);
    assert_eq!("ignore".parse::<InvalidPolicy>().unwrap(), InvalidPolicy::Ignore);
    assert!("drop".parse::<InvalidPolicy>().is_err());
}
