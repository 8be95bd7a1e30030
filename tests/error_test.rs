//! Tests for error types

use duernast_config::Error;

#[test]
fn test_validation_error_display() {
    let error = Error::Validation {
        experiment_name: "DUERNAST2017".to_string(),
        year: 2017,
        reason: "multi-year experiment requires an additional weather file".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("invalid configuration"));
    assert!(error_str.contains("DUERNAST2017"));
    assert!(error_str.contains("2017"));
    assert!(error_str.contains("requires an additional weather file"));
}

#[test]
fn test_unknown_year_error_display() {
    let error = Error::UnknownYear {
        year: 1999,
        available: vec![2015, 2017],
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("no experiment configured for year 1999"));
    assert!(error_str.contains("2015"));
    assert!(error_str.contains("2017"));
}

#[test]
fn test_unknown_year_error_empty_registry() {
    let error = Error::UnknownYear {
        year: 2015,
        available: vec![],
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("no experiment configured for year 2015"));
}
