/*!
 * Analysis report assembly.
 *
 * [`LyricAnalyzer`] runs every analyzer over one normalized text and
 * collects the results into an immutable [`AnalysisReport`]. The analyzers
 * only share read-only inputs, so the composition has no ordering
 * constraints and no side effects beyond debug logging.
 */

use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::app_config::AnalysisConfig;

use super::coherence::CoherenceScorer;
use super::devices::{self, PoeticDevices};
use super::metrics::{MetricAnalyzer, MetricIssue};
use super::repetition::{RepeatedWord, RepetitionDetector};
use super::rhyme::{self, RhymeAnalyzer, RhymeAssignment};
use super::stress::{StressIrregularity, StressIrregularityDetector};
use super::structure::{self, SongStructure};
use super::text;
use super::themes::{self, ThemeAnalysis};

/// Full analysis of one lyric text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// SHA-256 of the analyzed text, hex encoded
    pub fingerprint: String,

    /// Number of non-empty lines
    pub line_count: usize,

    /// Number of word tokens
    pub word_count: usize,

    /// Words per line (0.0 when there are no lines)
    pub avg_words_per_line: f64,

    /// Estimated syllables per line
    pub syllable_pattern: Vec<usize>,

    /// Mean of `syllable_pattern`
    pub mean_syllables: f64,

    /// Rhyme label for every line
    pub rhyme_scheme: Vec<RhymeAssignment>,

    pub repeated_words: Vec<RepeatedWord>,

    pub metric_issues: Vec<MetricIssue>,

    pub stress_irregularities: Vec<StressIrregularity>,

    pub poetic_devices: PoeticDevices,

    /// Verse / chorus / bridge marker counts
    pub structure: SongStructure,

    /// Dominant theme and per-theme scores of the whole text
    pub theme: ThemeAnalysis,

    /// Thematic continuity between adjacent lines
    pub coherence_score: u32,
}

impl AnalysisReport {
    /// Rhyme labels joined together, e.g. "AABB"
    pub fn rhyme_pattern(&self) -> String {
        rhyme::scheme(&self.rhyme_scheme)
    }

    /// Total number of flagged problems (metric, stress, repetition)
    pub fn issue_count(&self) -> usize {
        self.metric_issues.len() + self.stress_irregularities.len() + self.repeated_words.len()
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Lines: {} | Words: {} | Words/line: {:.1}\n",
            self.line_count, self.word_count, self.avg_words_per_line
        ));
        out.push_str(&format!(
            "Syllables: {:?} (mean {:.1})\n",
            self.syllable_pattern, self.mean_syllables
        ));
        out.push_str(&format!("Rhyme scheme: {}\n", self.rhyme_pattern()));
        out.push_str(&format!(
            "Theme: {} | Coherence: {}/100\n",
            self.theme.dominant, self.coherence_score
        ));
        out.push_str(&format!(
            "Structure: {} verses, {} choruses, {} bridges\n",
            self.structure.verses, self.structure.choruses, self.structure.bridges
        ));

        if !self.repeated_words.is_empty() {
            let words: Vec<String> = self
                .repeated_words
                .iter()
                .map(|r| format!("{} ({}x)", r.word, r.count))
                .collect();
            out.push_str(&format!("Repeated words: {}\n", words.join(", ")));
        }

        for issue in &self.metric_issues {
            out.push_str(&format!("Metric: {}\n", issue.description()));
        }

        for irregularity in &self.stress_irregularities {
            out.push_str(&format!("Stress: {}\n", irregularity.description()));
        }

        for kind in devices::DeviceKind::ALL {
            let found = self.poetic_devices.of_kind(kind);
            if !found.is_empty() {
                out.push_str(&format!("{}: {}\n", kind, found.join(" | ")));
            }
        }

        out
    }
}

/// Runs the whole analysis pipeline with one configuration
#[derive(Debug, Clone, Default)]
pub struct LyricAnalyzer {
    config: AnalysisConfig,
}

impl LyricAnalyzer {
    /// Create an analyzer with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze raw lyrics.
    ///
    /// Returns `None` when the trimmed text is shorter than
    /// `min_input_chars`: there is not enough material to report on.
    pub fn analyze(&self, raw: &str) -> Option<AnalysisReport> {
        let normalized = text::normalize(raw, self.config.min_input_chars)?;
        let lines = normalized.lines();
        let tokens = normalized.tokens();

        let metrics = MetricAnalyzer::with_threshold(self.config.metric_deviation_threshold)
            .analyze(lines);
        let rhyme_scheme = RhymeAnalyzer::with_key_length(self.config.rhyme_key_length).analyze(lines);
        let repeated_words = RepetitionDetector::with_limits(
            self.config.min_repeated_word_length,
            self.config.repetition_threshold,
        )
        .detect(tokens);
        let stress_irregularities = StressIrregularityDetector::with_policy(
            self.config.min_tokens_for_stress_check,
            self.config.irregularity_policy,
        )
        .detect_all(lines);
        let poetic_devices = devices::detect(normalized.raw(), tokens);
        let theme = themes::classify(normalized.raw());
        let coherence_score =
            CoherenceScorer::with_penalty(self.config.coherence_base, self.config.coherence_penalty)
                .score(lines);
        let structure = structure::count_sections(lines);

        let avg_words_per_line = if lines.is_empty() {
            0.0
        } else {
            tokens.len() as f64 / lines.len() as f64
        };

        let report = AnalysisReport {
            fingerprint: fingerprint(raw),
            line_count: lines.len(),
            word_count: tokens.len(),
            avg_words_per_line,
            syllable_pattern: metrics.syllables,
            mean_syllables: metrics.mean,
            rhyme_scheme,
            repeated_words,
            metric_issues: metrics.issues,
            stress_irregularities,
            poetic_devices,
            structure,
            theme,
            coherence_score,
        };

        debug!(
            "Analyzed {} lines: theme {}, rhyme {}, {} issues",
            report.line_count,
            report.theme.dominant,
            report.rhyme_pattern(),
            report.issue_count()
        );

        Some(report)
    }
}

/// Analyze lyrics with the default configuration.
pub fn analyze_lyrics(raw: &str) -> Option<AnalysisReport> {
    LyricAnalyzer::new().analyze(raw)
}

/// SHA-256 hex digest of a text
pub fn fingerprint(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}
