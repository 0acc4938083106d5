/*!
 * Metric (syllable count) analysis.
 *
 * Estimates syllables for every line, computes the mean and flags lines
 * whose count strays too far from it.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::syllables;

/// A line whose syllable count deviates from the lyric's average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricIssue {
    /// Zero-based index into the normalized lines
    pub line_index: usize,
    /// Estimated syllables of the line
    pub actual: usize,
    /// Rounded mean syllable count
    pub expected: usize,
    /// Absolute distance from the (unrounded) mean
    pub deviation: f64,
}

impl MetricIssue {
    /// Get a description of this issue.
    pub fn description(&self) -> String {
        format!(
            "Line {} has {} syllables, expected about {} (off by {:.1})",
            self.line_index + 1,
            self.actual,
            self.expected,
            self.deviation
        )
    }
}

/// Result of a metric analysis pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricAnalysis {
    /// Syllable count per line, in line order
    pub syllables: Vec<usize>,
    /// Mean syllable count (0.0 for no lines)
    pub mean: f64,
    /// Lines deviating beyond the threshold
    pub issues: Vec<MetricIssue>,
}

/// Metric analyzer.
pub struct MetricAnalyzer {
    threshold: f64,
}

impl MetricAnalyzer {
    /// Create an analyzer with the default threshold of 2 syllables.
    pub fn new() -> Self {
        Self { threshold: 2.0 }
    }

    /// Create with a custom deviation threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Analyze the syllable counts of the given lines.
    pub fn analyze(&self, lines: &[&str]) -> MetricAnalysis {
        if lines.is_empty() {
            return MetricAnalysis::default();
        }

        let syllables: Vec<usize> = lines.iter().map(|line| syllables::estimate(line)).collect();
        let mean = syllables.iter().sum::<usize>() as f64 / syllables.len() as f64;
        let expected = mean.round() as usize;

        let issues: Vec<MetricIssue> = syllables
            .iter()
            .enumerate()
            .filter_map(|(line_index, &actual)| {
                let deviation = (actual as f64 - mean).abs();
                (deviation > self.threshold).then_some(MetricIssue {
                    line_index,
                    actual,
                    expected,
                    deviation,
                })
            })
            .collect();

        debug!(
            "Metric analysis: {} lines, mean {:.2}, {} issues",
            lines.len(),
            mean,
            issues.len()
        );

        MetricAnalysis {
            syllables,
            mean,
            issues,
        }
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for MetricAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
