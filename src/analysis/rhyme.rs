/*!
 * Rhyme scheme inference.
 *
 * Each line's last word is reduced to a short suffix (the rhyme key). Lines
 * with equal keys share a label; labels are handed out A, B, C, … in order
 * of first appearance, continuing AA, AB, … after Z.
 */

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

/// Rhyme label assigned to one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeAssignment {
    /// Zero-based index of the line
    pub line_index: usize,
    /// Cleaned final word of the line
    pub word: String,
    /// Rhyme group label ("A", "B", ...)
    pub label: String,
}

/// Label for the n-th distinct rhyme key (0 -> "A", 25 -> "Z", 26 -> "AA").
pub fn label_for(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();

    while n > 0 {
        let remainder = (n - 1) % 26;
        letters.push(char::from(b'A' + remainder as u8));
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Final whitespace-delimited word of a line, lowercased with non-letters removed
pub fn final_word(line: &str) -> String {
    line.split_whitespace()
        .last()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Last `key_length` characters of a word, or the whole word if shorter
pub fn rhyme_key(word: &str, key_length: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars[chars.len().saturating_sub(key_length)..].iter().collect()
}

/// Rhyme scheme analyzer
pub struct RhymeAnalyzer {
    key_length: usize,
}

impl RhymeAnalyzer {
    /// Create an analyzer using three-character rhyme keys.
    pub fn new() -> Self {
        Self { key_length: 3 }
    }

    /// Create with a custom rhyme key length.
    pub fn with_key_length(key_length: usize) -> Self {
        Self { key_length }
    }

    /// Assign a rhyme label to every line, preserving line order.
    pub fn analyze(&self, lines: &[&str]) -> Vec<RhymeAssignment> {
        let mut labels: HashMap<String, String> = HashMap::new();

        let assignments: Vec<RhymeAssignment> = lines
            .iter()
            .enumerate()
            .map(|(line_index, line)| {
                let word = final_word(line);
                let key = rhyme_key(&word, self.key_length);
                let next = labels.len();
                let label = labels.entry(key).or_insert_with(|| label_for(next)).clone();

                RhymeAssignment {
                    line_index,
                    word,
                    label,
                }
            })
            .collect();

        debug!(
            "Rhyme analysis: {} lines, {} distinct rhyme groups",
            lines.len(),
            labels.len()
        );

        assignments
    }
}

impl Default for RhymeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenate the labels of a rhyme analysis (e.g. "ABAB")
pub fn scheme(assignments: &[RhymeAssignment]) -> String {
    assignments.iter().map(|a| a.label.as_str()).collect()
}
