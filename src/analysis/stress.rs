/*!
 * Stress classification and irregularity detection.
 *
 * Words are sorted into three heuristic stress classes from their written
 * accent and final letter. A line whose consecutive words switch class is
 * reported as a stress irregularity, either for every switch or for a
 * reproducible sample of them.
 */

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::text;

/// Vowels carrying a written stress accent
const ACCENTED_VOWELS: [char; 5] = ['á', 'é', 'í', 'ó', 'ú'];

/// Heuristic stress position of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressClass {
    /// Stress marked by a written accent
    Explicit,
    /// Penultimate-syllable stress (word ends in a vowel, "n" or "s")
    Paroxytone,
    /// Final-syllable stress
    Oxytone,
}

impl StressClass {
    /// Lowercase name of the class
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Paroxytone => "paroxytone",
            Self::Oxytone => "oxytone",
        }
    }
}

impl std::fmt::Display for StressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercase a word and keep only its letters
pub fn clean_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Classify the stress of a single word.
///
/// A word without letters falls through to `Oxytone`.
pub fn classify(word: &str) -> StressClass {
    let cleaned = clean_word(word);

    if cleaned.chars().any(|c| ACCENTED_VOWELS.contains(&c)) {
        return StressClass::Explicit;
    }

    match cleaned.chars().last() {
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'n' | 's') => StressClass::Paroxytone,
        _ => StressClass::Oxytone,
    }
}

/// How candidate stress changes become reported irregularities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IrregularityPolicy {
    /// Report every change of stress class between adjacent words
    #[default]
    EveryChange,

    /// Report each change with the given probability.
    ///
    /// The generator is seeded from `seed` and the line index, so the same
    /// text and seed always yield the same irregularities.
    Sampled {
        probability: f64,
        seed: u64,
    },
}

/// A change of stress class between two adjacent words of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressIrregularity {
    /// Zero-based index of the line
    pub line_index: usize,
    /// Index of `word` within the line's tokens
    pub position: usize,
    /// Word before the change
    pub previous_word: String,
    /// Word where the class changes
    pub word: String,
    /// Class of `previous_word`
    pub previous_class: StressClass,
    /// Class of `word`
    pub class: StressClass,
}

impl StressIrregularity {
    /// Get a description of this irregularity.
    pub fn description(&self) -> String {
        format!(
            "Line {}: stress shifts from {} '{}' to {} '{}'",
            self.line_index + 1,
            self.previous_class,
            self.previous_word,
            self.class,
            self.word
        )
    }
}

/// Detector for stress pattern breaks within lines
pub struct StressIrregularityDetector {
    min_tokens: usize,
    policy: IrregularityPolicy,
}

impl StressIrregularityDetector {
    /// Create a detector that checks lines with more than two words and
    /// reports every change.
    pub fn new() -> Self {
        Self {
            min_tokens: 2,
            policy: IrregularityPolicy::EveryChange,
        }
    }

    /// Create with a custom token minimum and policy.
    pub fn with_policy(min_tokens: usize, policy: IrregularityPolicy) -> Self {
        Self { min_tokens, policy }
    }

    /// Detect irregularities in a single line.
    pub fn detect(&self, line_index: usize, line: &str) -> Vec<StressIrregularity> {
        let tokens = text::tokenize(line);
        if tokens.len() <= self.min_tokens {
            return Vec::new();
        }

        let classes: Vec<StressClass> = tokens.iter().map(|t| classify(t)).collect();
        let mut sampler = self.sampler_for(line_index);
        let mut found = Vec::new();

        for position in 1..tokens.len() {
            let (previous_class, class) = (classes[position - 1], classes[position]);
            if previous_class == class {
                continue;
            }

            if let Some((rng, probability)) = sampler.as_mut() {
                if rng.random::<f64>() >= *probability {
                    continue;
                }
            }

            found.push(StressIrregularity {
                line_index,
                position,
                previous_word: tokens[position - 1].clone(),
                word: tokens[position].clone(),
                previous_class,
                class,
            });
        }

        found
    }

    /// Detect irregularities across all lines, in line order.
    pub fn detect_all(&self, lines: &[&str]) -> Vec<StressIrregularity> {
        let found: Vec<StressIrregularity> = lines
            .iter()
            .enumerate()
            .flat_map(|(index, line)| self.detect(index, line))
            .collect();

        debug!(
            "Stress detection ({:?}): {} irregularities over {} lines",
            self.policy,
            found.len(),
            lines.len()
        );

        found
    }

    fn sampler_for(&self, line_index: usize) -> Option<(StdRng, f64)> {
        match self.policy {
            IrregularityPolicy::EveryChange => None,
            IrregularityPolicy::Sampled { probability, seed } => {
                let line_seed = seed ^ (line_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                Some((StdRng::seed_from_u64(line_seed), probability))
            }
        }
    }
}

impl Default for StressIrregularityDetector {
    fn default() -> Self {
        Self::new()
    }
}
