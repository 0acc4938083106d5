/*!
 * Poetic device detection.
 *
 * Metaphors, personifications and hyperboles come from a declarative
 * catalogue of case-insensitive patterns applied to the raw text, so new
 * templates can be added without touching the detection loop. Alliteration
 * is found on the token stream instead.
 *
 * Verb and adjective templates are anchored at the start of the word only,
 * so inflected forms ("susurraba", "infinitos") still match; the reported
 * span is the template stem. Fixed phrases keep both word boundaries.
 *
 * Matches are returned as literal spans of the input, without
 * normalization or deduplication.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kind of poetic device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Metaphor,
    Alliteration,
    Personification,
    Hyperbole,
}

impl DeviceKind {
    /// All device kinds, in report order
    pub const ALL: [DeviceKind; 4] = [
        DeviceKind::Metaphor,
        DeviceKind::Alliteration,
        DeviceKind::Personification,
        DeviceKind::Hyperbole,
    ];

    /// Lowercase name of the device
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metaphor => "metaphor",
            Self::Alliteration => "alliteration",
            Self::Personification => "personification",
            Self::Hyperbole => "hyperbole",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the pattern catalogue
#[derive(Debug)]
pub struct DevicePattern {
    pub kind: DeviceKind,
    pub regex: Regex,
}

/// Pattern templates, by device kind.
///
/// Metaphor bodies run until the next comma, period or line break.
const PATTERN_SOURCES: &[(DeviceKind, &str)] = &[
    (DeviceKind::Metaphor, r"(?i)\bes una? [^,.\r\n]+"),
    (DeviceKind::Metaphor, r"(?i)\bcomo una? [^,.\r\n]+"),
    (DeviceKind::Metaphor, r"(?i)\bparece [^,.\r\n]+"),
    (DeviceKind::Metaphor, r"(?i)\bse convierte en [^,.\r\n]+"),
    (DeviceKind::Personification, r"(?i)\bel viento (?:susurra|canta|llora|grita)"),
    (DeviceKind::Personification, r"(?i)\bla luna (?:sonríe|baila|mira|llora)"),
    (DeviceKind::Personification, r"(?i)\bel sol (?:sonríe|besa|abraza|canta)"),
    (DeviceKind::Personification, r"(?i)\blas estrellas (?:bailan|cantan|lloran|susurran)"),
    (DeviceKind::Hyperbole, r"(?i)\bmil veces\b"),
    (DeviceKind::Hyperbole, r"(?i)\binfinit[oa]"),
    (DeviceKind::Hyperbole, r"(?i)\beternamente\b"),
    (DeviceKind::Hyperbole, r"(?i)\bnunca jamás\b"),
    (DeviceKind::Hyperbole, r"(?i)\bmás que\b"),
];

/// Compiled pattern catalogue
pub static DEVICE_CATALOGUE: Lazy<Vec<DevicePattern>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|(kind, source)| DevicePattern {
            kind: *kind,
            regex: Regex::new(source).expect("Invalid poetic device pattern"),
        })
        .collect()
});

/// A single detected device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoeticDeviceMatch {
    pub kind: DeviceKind,
    /// Literal matched text
    pub text: String,
}

/// Detected devices grouped by kind
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoeticDevices {
    pub metaphors: Vec<String>,
    pub alliterations: Vec<String>,
    pub personifications: Vec<String>,
    pub hyperboles: Vec<String>,
}

impl PoeticDevices {
    /// Add a match to the list for its kind.
    pub fn push(&mut self, found: PoeticDeviceMatch) {
        self.list_mut(found.kind).push(found.text);
    }

    /// Matches of one kind.
    pub fn of_kind(&self, kind: DeviceKind) -> &[String] {
        match kind {
            DeviceKind::Metaphor => &self.metaphors,
            DeviceKind::Alliteration => &self.alliterations,
            DeviceKind::Personification => &self.personifications,
            DeviceKind::Hyperbole => &self.hyperboles,
        }
    }

    /// Total number of matches across all kinds.
    pub fn total(&self) -> usize {
        DeviceKind::ALL.iter().map(|kind| self.of_kind(*kind).len()).sum()
    }

    /// Whether no device was found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn list_mut(&mut self, kind: DeviceKind) -> &mut Vec<String> {
        match kind {
            DeviceKind::Metaphor => &mut self.metaphors,
            DeviceKind::Alliteration => &mut self.alliterations,
            DeviceKind::Personification => &mut self.personifications,
            DeviceKind::Hyperbole => &mut self.hyperboles,
        }
    }
}

/// Apply every catalogue pattern to the raw text.
///
/// Results follow catalogue order, then position in the text.
pub fn find_pattern_matches(raw: &str) -> Vec<PoeticDeviceMatch> {
    DEVICE_CATALOGUE
        .iter()
        .flat_map(|pattern| {
            pattern.regex.find_iter(raw).map(|m| PoeticDeviceMatch {
                kind: pattern.kind,
                text: m.as_str().to_string(),
            })
        })
        .collect()
}

/// Find every window of three consecutive tokens starting with the same letter.
pub fn find_alliterations(tokens: &[String]) -> Vec<PoeticDeviceMatch> {
    tokens
        .windows(3)
        .filter(|window| {
            let first = window[0].chars().next();
            first.is_some_and(char::is_alphabetic)
                && window.iter().all(|token| token.chars().next() == first)
        })
        .map(|window| PoeticDeviceMatch {
            kind: DeviceKind::Alliteration,
            text: window.join(" "),
        })
        .collect()
}

/// Run all device detectors.
pub fn detect(raw: &str, tokens: &[String]) -> PoeticDevices {
    let mut devices = PoeticDevices::default();

    for found in find_pattern_matches(raw) {
        devices.push(found);
    }
    for found in find_alliterations(tokens) {
        devices.push(found);
    }

    debug!(
        "Device detection: {} metaphors, {} alliterations, {} personifications, {} hyperboles",
        devices.metaphors.len(),
        devices.alliterations.len(),
        devices.personifications.len(),
        devices.hyperboles.len()
    );

    devices
}
