/*!
 * Repeated-word detection.
 */

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

/// A word used more often than the repetition threshold allows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedWord {
    pub word: String,
    pub count: usize,
}

/// Counts token frequencies and reports overused words
pub struct RepetitionDetector {
    /// Tokens must be longer than this (in characters) to be counted
    min_word_length: usize,
    /// Words with a count above this are reported
    threshold: usize,
}

impl RepetitionDetector {
    /// Create a detector ignoring words of three characters or fewer and
    /// reporting words seen more than twice.
    pub fn new() -> Self {
        Self {
            min_word_length: 3,
            threshold: 2,
        }
    }

    /// Create with custom limits.
    pub fn with_limits(min_word_length: usize, threshold: usize) -> Self {
        Self {
            min_word_length,
            threshold,
        }
    }

    /// Detect repeated words, most frequent first (ties alphabetical).
    pub fn detect(&self, tokens: &[String]) -> Vec<RepeatedWord> {
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for token in tokens {
            if token.chars().count() > self.min_word_length {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        let mut repeated: Vec<RepeatedWord> = counts
            .into_iter()
            .filter(|(_, count)| *count > self.threshold)
            .map(|(word, count)| RepeatedWord {
                word: word.to_string(),
                count,
            })
            .collect();

        repeated.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

        debug!("Repetition detection: {} words over threshold", repeated.len());
        repeated
    }
}

impl Default for RepetitionDetector {
    fn default() -> Self {
        Self::new()
    }
}
