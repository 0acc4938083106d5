/*!
 * Text normalization for lyric analysis.
 *
 * Splits raw lyrics into trimmed, non-empty lines and a flat stream of
 * lowercase word tokens. Every other analyzer consumes one of these views.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Unicode-aware word matcher, so accented words stay in one piece
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("Invalid word regex"));

/// Lines and tokens extracted from one raw lyric text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText<'a> {
    raw: &'a str,
    lines: Vec<&'a str>,
    tokens: Vec<String>,
}

impl<'a> NormalizedText<'a> {
    /// The untouched input
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Non-empty trimmed lines in their original order
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Lowercase word tokens, duplicates retained
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Normalize raw text, or return `None` when it is too short to analyze.
///
/// The length check counts characters of the trimmed input, not bytes.
pub fn normalize(raw: &str, min_chars: usize) -> Option<NormalizedText<'_>> {
    let trimmed_len = raw.trim().chars().count();
    if trimmed_len < min_chars {
        debug!(
            "Skipping analysis: {} characters, {} required",
            trimmed_len, min_chars
        );
        return None;
    }

    Some(NormalizedText {
        raw,
        lines: split_lines(raw),
        tokens: tokenize(raw),
    })
}

/// Split text into trimmed lines, dropping the empty ones
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extract lowercase word tokens from text
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
