//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::MokuError;
use std::path::PathBuf;

/// Test that nested errors keep their message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let moku_error = MokuError::from(io_error);

    let error_string = format!("{moku_error}");
    assert!(error_string.starts_with("IO error"));
    assert!(error_string.contains("file not found"));
}

#[test]
fn test_config_error_conversion() {
    let error: MokuError = ConfigError::ValidationError("bad level".to_string()).into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );
}

#[test]
fn test_word_list_error_display() {
    let error = MokuError::WordList {
        path: PathBuf::from("words.txt"),
        line: 7,
        message: "stream did not contain valid UTF-8".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("words.txt"));
    assert!(display.contains("line 7"));
}

#[test]
fn test_value_out_of_range_display() {
    let error = ConfigError::ValueOutOfRange {
        key: "input.max_word_length".to_string(),
        message: "must be greater than 0".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration value input.max_word_length is out of valid range: must be greater than 0"
    );
}
