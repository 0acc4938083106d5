/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use lyricscope::analysis::IrregularityPolicy;
use lyricscope::app_config::{Config, LogLevel};
use lyricscope::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.analysis.min_input_chars, 10);
    assert_eq!(config.analysis.metric_deviation_threshold, 2.0);
    assert_eq!(config.analysis.rhyme_key_length, 3);
    assert_eq!(config.analysis.irregularity_policy, IrregularityPolicy::EveryChange);
    assert_eq!(config.analysis.coherence_base, 100);
    assert_eq!(config.analysis.coherence_penalty, 10);
    assert_eq!(config.hints.metaphor_threshold, 30);
    assert_eq!(config.hints.hyperbole_threshold, 75);
    assert_eq!(config.batch.concurrent_files, 4);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test that missing sections and fields fall back to defaults
#[test]
fn test_fromJson_withPartialConfig_shouldFillDefaults() {
    let config = Config::from_json(r#"{ "analysis": { "rhyme_key_length": 2 }, "log_level": "debug" }"#)
        .expect("partial config should parse");

    assert_eq!(config.analysis.rhyme_key_length, 2);
    assert_eq!(config.analysis.min_input_chars, 10);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.hints, Config::default().hints);
}

/// Test that the sampled policy is read from its tagged form
#[test]
fn test_fromJson_withSampledPolicy_shouldParseTaggedEnum() {
    let json = r#"{ "analysis": { "irregularity_policy": { "mode": "sampled", "probability": 0.3, "seed": 42 } } }"#;
    let config = Config::from_json(json).unwrap();

    assert_eq!(
        config.analysis.irregularity_policy,
        IrregularityPolicy::Sampled { probability: 0.3, seed: 42 }
    );
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.analysis.rhyme_key_length = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    config.analysis.rhyme_key_length = 3;

    config.analysis.metric_deviation_threshold = -1.0;
    assert!(config.validate().is_err());
    config.analysis.metric_deviation_threshold = 2.0;

    config.analysis.irregularity_policy = IrregularityPolicy::Sampled { probability: 1.5, seed: 1 };
    assert!(config.validate().is_err());
    config.analysis.irregularity_policy = IrregularityPolicy::EveryChange;

    config.hints.alliteration_threshold = 101;
    assert!(config.validate().is_err());
    config.hints.alliteration_threshold = 50;

    config.batch.concurrent_files = 0;
    assert!(config.validate().is_err());
    config.batch.concurrent_files = 4;

    assert!(config.validate().is_ok());
}

/// Test that invalid JSON is reported as a parse error
#[test]
fn test_fromJson_withMalformedJson_shouldReturnParseError() {
    let result = Config::from_json("{ not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

/// Test saving and loading a configuration file
#[test]
fn test_save_thenFromFile_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.analysis.coherence_penalty = 15;
    config.batch.extensions = vec!["lrc".to_string()];
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);

    Ok(())
}

/// Test that loading a missing file is an I/O error
#[test]
fn test_fromFile_withMissingFile_shouldReturnIoError() {
    let result = Config::from_file("/nonexistent/lyricscope/conf.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
