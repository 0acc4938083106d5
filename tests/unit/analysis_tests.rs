/*!
 * Tests for the analysis engine public API
 */

use lyricscope::analysis::{IrregularityPolicy, LyricAnalyzer, Theme, analyze_lyrics};
use lyricscope::app_config::AnalysisConfig;
use crate::common;

/// Test that the sample lyrics produce the expected headline numbers
#[test]
fn test_analyzeLyrics_withSample_shouldReportCounts() {
    let report = analyze_lyrics(common::SAMPLE_LYRICS).expect("sample is long enough");

    assert_eq!(report.line_count, 4);
    assert_eq!(report.syllable_pattern.len(), 4);
    assert_eq!(report.rhyme_scheme.len(), 4);
    assert_eq!(report.theme.dominant, Theme::Love);
    assert!(report.metric_issues.is_empty());
}

/// Test that texts below the minimum length yield no report
#[test]
fn test_analyzeLyrics_withTinyInput_shouldReturnNone() {
    assert!(analyze_lyrics("").is_none());
    assert!(analyze_lyrics("   la la   ").is_none());
}

/// Test section markers, rhyme labels and theme of a marked song
#[test]
fn test_analyzeLyrics_withMarkedSong_shouldCountSections() {
    let report = analyze_lyrics(common::MARKED_SONG).unwrap();

    assert_eq!(report.structure.verses, 1);
    assert_eq!(report.structure.choruses, 2);
    assert_eq!(report.structure.bridges, 0);
    assert_eq!(report.rhyme_pattern(), "ABCDEFDE");
    assert_eq!(report.theme.dominant, Theme::Nature);
}

/// Test that every report of the same text is identical
#[test]
fn test_analyze_repeated_shouldBeDeterministic() {
    let analyzer = LyricAnalyzer::new();
    let first = analyzer.analyze(common::MARKED_SONG).unwrap();
    let second = analyzer.analyze(common::MARKED_SONG).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.fingerprint.len(), 64);
}

/// Test that a shorter rhyme key groups more endings together
#[test]
fn test_analyze_withShortRhymeKey_shouldGroupEndings() {
    let lyrics = "Camino junto al mar\nbusco mi lugar";

    let default_report = analyze_lyrics(lyrics).unwrap();
    assert_eq!(default_report.rhyme_pattern(), "AB");

    let config = AnalysisConfig {
        rhyme_key_length: 2,
        ..AnalysisConfig::default()
    };
    let report = LyricAnalyzer::with_config(config).analyze(lyrics).unwrap();
    assert_eq!(report.rhyme_pattern(), "AA");
}

/// Test that the coherence penalty is taken from the configuration
#[test]
fn test_analyze_withCustomPenalty_shouldApplyIt() {
    let config = AnalysisConfig {
        coherence_penalty: 25,
        ..AnalysisConfig::default()
    };
    let report = LyricAnalyzer::with_config(config)
        .analyze(common::SAMPLE_LYRICS)
        .unwrap();

    // a single love -> nature break
    assert_eq!(report.coherence_score, 75);
}

/// Test that sampling with probability zero drops every irregularity
#[test]
fn test_analyze_withZeroProbabilitySampling_shouldReportNoIrregularities() {
    let lyrics = "casa amor luna sol mar cielo papel rosa ciudad final";
    assert!(!analyze_lyrics(lyrics).unwrap().stress_irregularities.is_empty());

    let config = AnalysisConfig {
        irregularity_policy: IrregularityPolicy::Sampled { probability: 0.0, seed: 7 },
        ..AnalysisConfig::default()
    };
    let report = LyricAnalyzer::with_config(config).analyze(lyrics).unwrap();
    assert!(report.stress_irregularities.is_empty());
}

/// Test that the report serializes with lowercase enum names
#[test]
fn test_report_toJson_shouldUseLowercaseNames() {
    let report = analyze_lyrics(common::SAMPLE_LYRICS).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["theme"]["dominant"], "love");
    assert_eq!(json["line_count"], 4);
    assert!(json["poetic_devices"]["personifications"].is_array());
}

/// Test the full pipeline on emoji, CJK, combining marks and control characters
#[test]
fn test_analyzeLyrics_withArbitraryUnicode_shouldNotPanic() {
    let lyrics = "🎵🎶 漢字かな ÑANDÚ \u{0301}\u{200b}\r\r\r e\u{0301}s un sueño\n\
                  mi canción suena 🎶\n\
                  \t\u{0000}Ⅻ ǅ İstanbul ﬁn 123";

    let report = analyze_lyrics(lyrics).expect("long enough to analyze");

    assert_eq!(report.line_count, 3);
    assert!(report.syllable_pattern.iter().all(|count| *count >= 1));

    // lines ending in an emoji or a number have no letters to rhyme on
    assert_eq!(report.rhyme_scheme[1].word, "");
    assert_eq!(report.rhyme_scheme[2].word, "");
    assert_eq!(report.rhyme_pattern(), "ABB");
}
