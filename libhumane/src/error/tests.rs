use super::*;
use std::error::Error;

#[test]
fn test_invalid_instant_error_message() {
    let err = HumaneError::InvalidInstant {
        input: "the day after never".to_string(),
        reason: "no known date layout matched".to_string(),
    };

    assert!(matches!(err, HumaneError::InvalidInstant { .. }));
    assert!(err.to_string().contains("the day after never"));
    assert!(err.to_string().contains("no known date layout matched"));
}

#[test]
fn test_invalid_instant_has_no_source() {
    let err = HumaneError::invalid_instant("2020-13-45", "month out of range");
    assert!(err.source().is_none());
}

#[test]
fn test_config_error_message() {
    let err = HumaneError::Config {
        message: "invalid month format".to_string(),
        path: Some("/path/to/config.yaml".to_string()),
        source: None,
    };

    assert!(matches!(err, HumaneError::Config { .. }));
    assert!(err.to_string().contains("invalid month format"));
}

#[test]
fn test_config_error_with_source() {
    let source_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");

    let err = HumaneError::Config {
        message: "failed to read config".to_string(),
        path: Some("/path/to/config.yaml".to_string()),
        source: Some(Box::new(source_error)),
    };

    assert!(err.source().is_some());
    assert!(err.source().unwrap().to_string().contains("file not found"));
}

#[test]
fn test_error_debug_format() {
    let err = HumaneError::invalid_instant("x", "y");
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("InvalidInstant"));
}

// Tests for helper constructors

#[test]
fn test_invalid_instant_helper_constructor() {
    let err = HumaneError::invalid_instant("yesterday-ish", "no known date layout matched");
    assert!(matches!(err, HumaneError::InvalidInstant { .. }));
    assert!(err.to_string().contains("yesterday-ish"));
}

#[test]
fn test_config_helper_constructor() {
    let err = HumaneError::config("invalid config file", Some("/path/to/config.yaml"));
    assert!(matches!(err, HumaneError::Config { .. }));
    assert!(err.to_string().contains("invalid config file"));
}

#[test]
fn test_config_with_source_helper_constructor() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err = HumaneError::config_with_source(
        "failed to read config",
        Some("/path/to/config.yaml"),
        io_err,
    );
    assert!(matches!(err, HumaneError::Config { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_from_config_error_has_no_path() {
    let err = HumaneError::from(config::ConfigError::Message("bad value".to_string()));
    match &err {
        HumaneError::Config { path, message, .. } => {
            assert!(path.is_none());
            assert_eq!(message, "Failed to build configuration");
        }
        other => panic!("expected config error, got {:?}", other),
    }
    assert!(err.source().unwrap().to_string().contains("bad value"));
}

#[test]
fn test_config_helper_accepts_mixed_string_types() {
    let err = HumaneError::config("missing file", Some(String::from("/tmp/humane.yaml")));
    match err {
        HumaneError::Config { path, source, .. } => {
            assert_eq!(path.as_deref(), Some("/tmp/humane.yaml"));
            assert!(source.is_none());
        }
        other => panic!("expected config error, got {:?}", other),
    }
}
