/*!
 * Generation hints derived from an analysis report.
 *
 * A lyric generator (or improver) receives these hints alongside the draft:
 * the dominant theme to keep, the current rhyme pattern, the problems to fix,
 * and the poetic devices worth requesting at the chosen complexity level.
 * This module only produces data; it never talks to a generation backend.
 */

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisReport, DeviceKind, Theme};
use crate::app_config::HintConfig;

/// Steering data for a lyric generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationHints {
    /// Complexity level (0-100) the hints were built for
    pub complexity: u8,

    /// Theme the rewrite should stay on
    pub theme: Theme,

    /// Current rhyme pattern, e.g. "ABAB"
    pub rhyme_pattern: String,

    /// Coherence score of the draft
    pub coherence_score: u32,

    /// Devices the generator should use
    pub requested_devices: Vec<DeviceKind>,

    /// Short notes about problems in the draft
    pub issue_notes: Vec<String>,
}

impl GenerationHints {
    /// Build hints from a report and a complexity level.
    ///
    /// Complexity values above 100 are treated as 100.
    pub fn from_report(report: &AnalysisReport, complexity: u8, config: &HintConfig) -> Self {
        let complexity = complexity.min(100);

        Self {
            complexity,
            theme: report.theme.dominant,
            rhyme_pattern: report.rhyme_pattern(),
            coherence_score: report.coherence_score,
            requested_devices: requested_devices(complexity, config),
            issue_notes: issue_notes(report, config.max_issue_notes),
        }
    }

    /// Render the hints as a plain-text block for a generation prompt.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("Complexity: {}/100", self.complexity)];

        if self.theme.is_known() {
            lines.push(format!("Keep the central theme: {}", self.theme));
        }
        if !self.rhyme_pattern.is_empty() {
            lines.push(format!("Current rhyme scheme: {}", self.rhyme_pattern));
        }
        lines.push(format!("Thematic coherence: {}/100", self.coherence_score));

        if !self.requested_devices.is_empty() {
            let names: Vec<&str> = self.requested_devices.iter().map(|d| d.as_str()).collect();
            lines.push(format!("Use these devices: {}", names.join(", ")));
        }

        if !self.issue_notes.is_empty() {
            lines.push("Fix:".to_string());
            lines.extend(self.issue_notes.iter().map(|note| format!("- {}", note)));
        }

        lines.join("\n")
    }
}

/// Devices whose complexity gate is strictly below `complexity`, in report order
pub fn requested_devices(complexity: u8, config: &HintConfig) -> Vec<DeviceKind> {
    DeviceKind::ALL
        .into_iter()
        .filter(|kind| complexity > threshold_for(*kind, config))
        .collect()
}

fn threshold_for(kind: DeviceKind, config: &HintConfig) -> u8 {
    match kind {
        DeviceKind::Metaphor => config.metaphor_threshold,
        DeviceKind::Alliteration => config.alliteration_threshold,
        DeviceKind::Personification => config.personification_threshold,
        DeviceKind::Hyperbole => config.hyperbole_threshold,
    }
}

/// Most important problems first: metric, then repetition, then stress
fn issue_notes(report: &AnalysisReport, limit: usize) -> Vec<String> {
    let metric = report.metric_issues.iter().map(|issue| issue.description());
    let repetition = report
        .repeated_words
        .iter()
        .map(|r| format!("'{}' is repeated {} times", r.word, r.count));
    let stress = report
        .stress_irregularities
        .iter()
        .map(|irregularity| irregularity.description());

    metric.chain(repetition).chain(stress).take(limit).collect()
}
