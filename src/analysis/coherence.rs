/*!
 * Thematic coherence scoring.
 */

use log::debug;

use super::themes;

/// Penalizes theme changes between consecutive lines
pub struct CoherenceScorer {
    base: u32,
    penalty: u32,
}

impl CoherenceScorer {
    /// Create a scorer starting at 100 with a penalty of 10 per change.
    pub fn new() -> Self {
        Self {
            base: 100,
            penalty: 10,
        }
    }

    /// Create with a custom base score and penalty.
    pub fn with_penalty(base: u32, penalty: u32) -> Self {
        Self { base, penalty }
    }

    /// Score the thematic continuity of the lines.
    ///
    /// Only pairs where both lines have a known, different dominant theme
    /// are penalized. The result never drops below 0.
    pub fn score(&self, lines: &[&str]) -> u32 {
        let line_themes: Vec<themes::Theme> = lines
            .iter()
            .map(|line| themes::classify(line).dominant)
            .collect();

        let breaks = line_themes
            .windows(2)
            .filter(|pair| pair[0].is_known() && pair[1].is_known() && pair[0] != pair[1])
            .count();

        let score = i64::from(self.base) - i64::from(self.penalty) * breaks as i64;
        debug!("Coherence: {} theme breaks, raw score {}", breaks, score);

        score.max(0) as u32
    }
}

impl Default for CoherenceScorer {
    fn default() -> Self {
        Self::new()
    }
}
