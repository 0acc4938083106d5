/*!
 * Theme classification by keyword buckets.
 *
 * Each theme owns a short keyword list. A text scores one point per
 * (non-overlapping) substring occurrence of each keyword; the highest
 * scoring theme wins, earlier buckets winning ties.
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lyric theme. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Love,
    Sadness,
    Happiness,
    Nature,
    Freedom,
    Nostalgia,
    /// No keyword matched
    Unknown,
}

impl Theme {
    /// Lowercase name of the theme
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Sadness => "sadness",
            Self::Happiness => "happiness",
            Self::Nature => "nature",
            Self::Freedom => "freedom",
            Self::Nostalgia => "nostalgia",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this is a real bucket rather than `Unknown`
    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword buckets in tie-break order
pub const THEME_BUCKETS: [(Theme, &[&str]); 6] = [
    (Theme::Love, &["amor", "corazón", "beso", "pasión", "querer", "amar"]),
    (Theme::Sadness, &["triste", "llanto", "lágrima", "dolor", "soledad", "pena", "adiós"]),
    (Theme::Happiness, &["feliz", "alegría", "sonrisa", "reír", "fiesta", "bailar"]),
    (Theme::Nature, &["sol", "luna", "mar", "viento", "cielo", "estrella", "flor", "lluvia"]),
    (Theme::Freedom, &["libre", "libertad", "volar", "alas", "horizonte", "cadenas"]),
    (Theme::Nostalgia, &["recuerdo", "ayer", "pasado", "memoria", "nostalgia", "extraño"]),
];

/// Theme scores and the dominant theme for a text span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAnalysis {
    pub dominant: Theme,
    /// Score for every bucket, zero scores included
    pub scores: BTreeMap<Theme, usize>,
}

/// Score a text against every bucket.
pub fn score(text: &str) -> BTreeMap<Theme, usize> {
    let lower = text.to_lowercase();

    THEME_BUCKETS
        .iter()
        .map(|(theme, keywords)| {
            let hits: usize = keywords.iter().map(|kw| lower.matches(kw).count()).sum();
            (*theme, hits)
        })
        .collect()
}

/// Pick the dominant theme from bucket scores.
pub fn dominant_theme(scores: &BTreeMap<Theme, usize>) -> Theme {
    let mut best = Theme::Unknown;
    let mut best_score = 0;

    for (theme, _) in THEME_BUCKETS.iter() {
        let value = scores.get(theme).copied().unwrap_or(0);
        if value > best_score {
            best = *theme;
            best_score = value;
        }
    }

    best
}

/// Score a text and pick its dominant theme.
pub fn classify(text: &str) -> ThemeAnalysis {
    let scores = score(text);
    ThemeAnalysis {
        dominant: dominant_theme(&scores),
        scores,
    }
}
