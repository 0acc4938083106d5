/*!
 * Lyric analysis engine.
 *
 * Turns raw lyric text into an [`AnalysisReport`]. Every stage is a pure
 * function of its input:
 * - **Text**: line splitting and word tokenization
 * - **Syllables / Metrics**: vowel-group syllable estimates and metric deviations
 * - **Stress**: heuristic stress classes and irregularity detection
 * - **Rhyme**: rhyme keys and A/B/C scheme labels
 * - **Repetition**: overused words
 * - **Devices**: metaphor, alliteration, personification and hyperbole
 * - **Themes / Coherence**: dominant theme and thematic continuity
 * - **Structure**: verse, chorus and bridge markers
 *
 * The report module composes them without sharing any mutable state.
 */

pub mod coherence;
pub mod devices;
pub mod metrics;
pub mod repetition;
pub mod report;
pub mod rhyme;
pub mod stress;
pub mod structure;
pub mod syllables;
pub mod text;
pub mod themes;

// Re-export main types
pub use coherence::CoherenceScorer;
pub use devices::{DeviceKind, PoeticDeviceMatch, PoeticDevices};
pub use metrics::{MetricAnalysis, MetricAnalyzer, MetricIssue};
pub use repetition::{RepeatedWord, RepetitionDetector};
pub use report::{AnalysisReport, LyricAnalyzer, analyze_lyrics};
pub use rhyme::{RhymeAnalyzer, RhymeAssignment};
pub use stress::{IrregularityPolicy, StressClass, StressIrregularity, StressIrregularityDetector};
pub use structure::SongStructure;
pub use text::NormalizedText;
pub use themes::{Theme, ThemeAnalysis};
