/*!
 * Tests for generation hints
 */

use lyricscope::analysis::{DeviceKind, Theme, analyze_lyrics};
use lyricscope::app_config::HintConfig;
use lyricscope::hints::{GenerationHints, requested_devices};
use crate::common;

#[test]
fn test_fromReport_withSample_shouldCarryThemeAndRhyme() {
    let report = analyze_lyrics(common::SAMPLE_LYRICS).unwrap();
    let hints = GenerationHints::from_report(&report, 80, &HintConfig::default());

    assert_eq!(hints.theme, Theme::Love);
    assert_eq!(hints.rhyme_pattern, "ABCD");
    assert_eq!(hints.coherence_score, 90);
    assert_eq!(hints.requested_devices, DeviceKind::ALL.to_vec());
}

#[test]
fn test_fromReport_withLowComplexity_shouldRequestNothing() {
    let report = analyze_lyrics(common::SAMPLE_LYRICS).unwrap();
    let hints = GenerationHints::from_report(&report, 10, &HintConfig::default());

    assert!(hints.requested_devices.is_empty());
    assert!(!hints.render().contains("Use these devices"));
}

#[test]
fn test_requestedDevices_withCustomGates_shouldFollowConfig() {
    let config = HintConfig {
        metaphor_threshold: 90,
        alliteration_threshold: 0,
        personification_threshold: 100,
        hyperbole_threshold: 10,
        max_issue_notes: 5,
    };

    assert_eq!(
        requested_devices(50, &config),
        vec![DeviceKind::Alliteration, DeviceKind::Hyperbole]
    );
    // a gate of 100 can never be passed
    assert!(!requested_devices(100, &config).contains(&DeviceKind::Personification));
}

#[test]
fn test_render_withSample_shouldListRhymeScheme() {
    let report = analyze_lyrics(common::SAMPLE_LYRICS).unwrap();
    let text = GenerationHints::from_report(&report, 40, &HintConfig::default()).render();

    assert!(text.starts_with("Complexity: 40/100"));
    assert!(text.contains("Current rhyme scheme: ABCD"));
    assert!(text.contains("Use these devices: metaphor"));
}

#[test]
fn test_hints_toJson_shouldListDeviceNames() {
    let report = analyze_lyrics(common::SAMPLE_LYRICS).unwrap();
    let hints = GenerationHints::from_report(&report, 55, &HintConfig::default());
    let json = serde_json::to_value(&hints).unwrap();

    assert_eq!(json["requested_devices"][0], "metaphor");
    assert_eq!(json["requested_devices"][1], "alliteration");
}
