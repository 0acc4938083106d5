/*!
 * Song structure markers.
 *
 * A coarse count of lines that mention a section keyword, such as "[Coro]"
 * or "Verso 2:". Each line counts at most once per section kind.
 */

use serde::{Deserialize, Serialize};

const VERSE_KEYWORDS: &[&str] = &["verso", "estrofa", "verse"];
const CHORUS_KEYWORDS: &[&str] = &["coro", "estribillo", "chorus"];
const BRIDGE_KEYWORDS: &[&str] = &["puente", "bridge"];

/// Lines mentioning each section kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongStructure {
    pub verses: usize,
    pub choruses: usize,
    pub bridges: usize,
}

impl SongStructure {
    /// Whether any section marker was found
    pub fn has_markers(&self) -> bool {
        self.verses + self.choruses + self.bridges > 0
    }
}

fn count_lines_with(lowered: &[String], keywords: &[&str]) -> usize {
    lowered
        .iter()
        .filter(|line| keywords.iter().any(|kw| line.contains(kw)))
        .count()
}

/// Count the lines containing verse, chorus and bridge keywords.
pub fn count_sections(lines: &[&str]) -> SongStructure {
    let lowered: Vec<String> = lines.iter().map(|line| line.to_lowercase()).collect();

    SongStructure {
        verses: count_lines_with(&lowered, VERSE_KEYWORDS),
        choruses: count_lines_with(&lowered, CHORUS_KEYWORDS),
        bridges: count_lines_with(&lowered, BRIDGE_KEYWORDS),
    }
}
