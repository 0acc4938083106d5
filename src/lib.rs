/*!
 * # lyricscope - Lyric analysis engine
 *
 * A Rust library that turns raw song lyrics into a structured analysis report,
 * tuned for Spanish-language text.
 *
 * ## Features
 *
 * - Syllable estimation and metric deviation detection
 * - Heuristic stress classification and irregularity detection
 * - Rhyme scheme labelling (A, B, C, ...)
 * - Repeated word detection
 * - Poetic devices:
 *   - Metaphor
 *   - Alliteration
 *   - Personification
 *   - Hyperbole
 * - Theme classification and thematic coherence scoring
 * - Verse / chorus / bridge marker counts
 * - Generation hints for downstream lyric generators
 * - Concurrent batch analysis of lyric files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `analysis`: The pure analysis engine:
 *   - `analysis::text`: Line splitting and tokenization
 *   - `analysis::metrics`: Syllable counts and metric issues
 *   - `analysis::stress`: Stress classes and irregularities
 *   - `analysis::rhyme`: Rhyme scheme
 *   - `analysis::devices`: Poetic device detection
 *   - `analysis::themes`: Theme scoring
 *   - `analysis::report`: Report assembly
 * - `hints`: Generation hints built from a report
 * - `batch`: Concurrent analysis of many files
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod batch;
pub mod errors;
pub mod file_utils;
pub mod hints;

// Re-export main types for easier usage
pub use analysis::{AnalysisReport, LyricAnalyzer, analyze_lyrics};
pub use app_config::Config;
pub use batch::{BatchAnalyzer, FileAnalysis, FileOutcome};
pub use errors::{AppError, ConfigError, InputError};
pub use hints::GenerationHints;
