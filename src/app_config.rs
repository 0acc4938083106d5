use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::stress::IrregularityPolicy;
use crate::errors::ConfigError;

/// Application configuration module
/// This module handles loading, validating and saving configuration settings.
/// Every tunable constant of the analysis engine lives here so it can be
/// adjusted without recompiling.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Analysis engine settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Generation hint settings
    #[serde(default)]
    pub hints: HintConfig,

    /// Batch (directory) processing settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Thresholds and constants used by the analysis engine
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Minimum number of characters (after trimming) required to produce a report
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,

    /// A line is a metric issue when its syllable count differs from the mean by more than this
    #[serde(default = "default_metric_deviation_threshold")]
    pub metric_deviation_threshold: f64,

    /// Lines need more than this many tokens before stress changes are checked
    #[serde(default = "default_min_tokens_for_stress_check")]
    pub min_tokens_for_stress_check: usize,

    /// How stress-class changes are turned into irregularities
    #[serde(default)]
    pub irregularity_policy: IrregularityPolicy,

    /// Number of trailing characters of the last word used as rhyme key
    #[serde(default = "default_rhyme_key_length")]
    pub rhyme_key_length: usize,

    /// Words must be longer than this to count as repetitions
    #[serde(default = "default_min_repeated_word_length")]
    pub min_repeated_word_length: usize,

    /// Words occurring more often than this are reported as repeated
    #[serde(default = "default_repetition_threshold")]
    pub repetition_threshold: usize,

    /// Coherence score before any penalty
    #[serde(default = "default_coherence_base")]
    pub coherence_base: u32,

    /// Penalty subtracted for each theme change between adjacent lines
    #[serde(default = "default_coherence_penalty")]
    pub coherence_penalty: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_input_chars: default_min_input_chars(),
            metric_deviation_threshold: default_metric_deviation_threshold(),
            min_tokens_for_stress_check: default_min_tokens_for_stress_check(),
            irregularity_policy: IrregularityPolicy::default(),
            rhyme_key_length: default_rhyme_key_length(),
            min_repeated_word_length: default_min_repeated_word_length(),
            repetition_threshold: default_repetition_threshold(),
            coherence_base: default_coherence_base(),
            coherence_penalty: default_coherence_penalty(),
        }
    }
}

/// Complexity gates for the devices requested from a lyric generator.
///
/// A device is requested only when the complexity level (0-100) is strictly
/// above its threshold.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HintConfig {
    #[serde(default = "default_metaphor_threshold")]
    pub metaphor_threshold: u8,

    #[serde(default = "default_alliteration_threshold")]
    pub alliteration_threshold: u8,

    #[serde(default = "default_personification_threshold")]
    pub personification_threshold: u8,

    #[serde(default = "default_hyperbole_threshold")]
    pub hyperbole_threshold: u8,

    /// Maximum number of issue notes carried into the hints
    #[serde(default = "default_max_issue_notes")]
    pub max_issue_notes: usize,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            metaphor_threshold: default_metaphor_threshold(),
            alliteration_threshold: default_alliteration_threshold(),
            personification_threshold: default_personification_threshold(),
            hyperbole_threshold: default_hyperbole_threshold(),
            max_issue_notes: default_max_issue_notes(),
        }
    }
}

/// Configuration for analyzing many lyric files at once
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchConfig {
    /// Maximum number of files analyzed concurrently
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// File extensions picked up when scanning a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrent_files: default_concurrent_files(),
            extensions: default_extensions(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_min_input_chars() -> usize {
    10
}

fn default_metric_deviation_threshold() -> f64 {
    2.0
}

fn default_min_tokens_for_stress_check() -> usize {
    2
}

fn default_rhyme_key_length() -> usize {
    3
}

fn default_min_repeated_word_length() -> usize {
    3 // skips "el", "de", "que", "mar"...
}

fn default_repetition_threshold() -> usize {
    2
}

fn default_coherence_base() -> u32 {
    100
}

fn default_coherence_penalty() -> u32 {
    10
}

fn default_metaphor_threshold() -> u8 {
    30
}

fn default_alliteration_threshold() -> u8 {
    50
}

fn default_personification_threshold() -> u8 {
    60
}

fn default_hyperbole_threshold() -> u8 {
    75
}

fn default_max_issue_notes() -> usize {
    5
}

fn default_concurrent_files() -> usize {
    4
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "lyrics".to_string()]
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, json).map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.hints.validate()?;

        if self.batch.concurrent_files == 0 {
            return Err(ConfigError::invalid(
                "batch.concurrent_files",
                "must be at least 1",
            ));
        }
        if self.batch.extensions.iter().any(|ext| ext.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "batch.extensions",
                "extensions must not be empty",
            ));
        }

        Ok(())
    }
}

impl AnalysisConfig {
    /// Validate the analysis thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.metric_deviation_threshold.is_finite() || self.metric_deviation_threshold < 0.0 {
            return Err(ConfigError::invalid(
                "analysis.metric_deviation_threshold",
                format!("must be a non-negative number, got {}", self.metric_deviation_threshold),
            ));
        }

        if self.rhyme_key_length == 0 {
            return Err(ConfigError::invalid(
                "analysis.rhyme_key_length",
                "must be at least 1",
            ));
        }

        if let IrregularityPolicy::Sampled { probability, .. } = self.irregularity_policy {
            if !(0.0..=1.0).contains(&probability) {
                return Err(ConfigError::invalid(
                    "analysis.irregularity_policy.probability",
                    format!("must be within [0, 1], got {}", probability),
                ));
            }
        }

        if self.coherence_penalty > self.coherence_base {
            return Err(ConfigError::invalid(
                "analysis.coherence_penalty",
                format!(
                    "penalty {} exceeds the base score {}",
                    self.coherence_penalty, self.coherence_base
                ),
            ));
        }

        Ok(())
    }
}

impl HintConfig {
    /// Validate the complexity gates
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gates = [
            ("hints.metaphor_threshold", self.metaphor_threshold),
            ("hints.alliteration_threshold", self.alliteration_threshold),
            ("hints.personification_threshold", self.personification_threshold),
            ("hints.hyperbole_threshold", self.hyperbole_threshold),
        ];

        for (field, value) in gates {
            if value > 100 {
                return Err(ConfigError::invalid(
                    field,
                    format!("complexity gates range over 0-100, got {}", value),
                ));
            }
        }

        Ok(())
    }
}
