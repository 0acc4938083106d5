/*!
 * Tests for error types and conversions
 */

use lyricscope::errors::{AppError, ConfigError, InputError};

#[test]
fn test_configError_invalid_shouldDisplayFieldAndMessage() {
    let error = ConfigError::invalid("analysis.rhyme_key_length", "must be at least 1");
    let display = format!("{}", error);
    assert!(display.contains("analysis.rhyme_key_length"));
    assert!(display.contains("must be at least 1"));
}

#[test]
fn test_inputError_notFound_shouldDisplayPath() {
    let error = InputError::NotFound("songs/missing.txt".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Input not found"));
    assert!(display.contains("songs/missing.txt"));
}

#[test]
fn test_appError_fromConfigError_shouldWrap() {
    let app_error: AppError = ConfigError::Parse("unexpected token".to_string()).into();
    assert!(matches!(app_error, AppError::Config(ConfigError::Parse(_))));
    assert!(app_error.to_string().contains("unexpected token"));
}

#[test]
fn test_appError_fromInputError_shouldWrap() {
    let app_error: AppError = InputError::Unsupported("song.mp3".to_string()).into();
    assert!(matches!(app_error, AppError::Input(_)));
    assert!(app_error.to_string().starts_with("Input error"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "something odd"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}
