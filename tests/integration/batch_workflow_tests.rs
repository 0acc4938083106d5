/*!
 * End-to-end tests: discover lyric files in a directory and analyze them
 */

use anyhow::Result;
use lyricscope::analysis::Theme;
use lyricscope::app_config::Config;
use lyricscope::batch::{BatchAnalyzer, FileOutcome};
use lyricscope::file_utils::FileManager;
use lyricscope::{GenerationHints, LyricAnalyzer};
use crate::common;

#[tokio::test]
async fn test_directoryAnalysis_shouldAnalyzeEveryLyricFile() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "01_sample.txt", common::SAMPLE_LYRICS)?;
    common::create_test_file(temp_dir.path(), "02_marked.lyrics", common::MARKED_SONG)?;
    common::create_test_file(temp_dir.path(), "03_short.txt", "ay")?;
    common::create_test_file(temp_dir.path(), "readme.md", common::SAMPLE_LYRICS)?;

    let config = Config::default();
    let files = FileManager::collect_inputs(temp_dir.path(), &config.batch.extensions)?;
    assert_eq!(files.len(), 3);

    let results = BatchAnalyzer::new(
        LyricAnalyzer::with_config(config.analysis.clone()),
        config.batch.concurrent_files,
    )
    .analyze_files(&files, |_, _| {})
    .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].report().unwrap().theme.dominant, Theme::Love);
    assert_eq!(results[1].report().unwrap().structure.choruses, 2);
    assert_eq!(results[2].outcome, FileOutcome::InsufficientText);

    Ok(())
}

#[tokio::test]
async fn test_directoryAnalysis_thenHints_shouldMatchSingleAnalysis() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "song.txt", common::SAMPLE_LYRICS)?;

    let results = BatchAnalyzer::new(LyricAnalyzer::new(), 1)
        .analyze_files(&[file], |_, _| {})
        .await;
    let batch_report = results[0].report().expect("file should be analyzed");

    let direct_report = LyricAnalyzer::new().analyze(common::SAMPLE_LYRICS).unwrap();
    assert_eq!(batch_report, &direct_report);

    let config = Config::default();
    let hints = GenerationHints::from_report(batch_report, 65, &config.hints);
    assert_eq!(hints.requested_devices.len(), 3);

    Ok(())
}

#[test]
fn test_batchAnalyzer_withNoFiles_shouldReturnEmpty() {
    common::init_test_logging();

    let results = tokio_test::block_on(
        BatchAnalyzer::new(LyricAnalyzer::new(), 2).analyze_files(&[], |_, _| {}),
    );

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_singleShortFile_shouldBeInsufficientTextNotFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.txt", "ay")?;

    let config = Config::default();
    let files = FileManager::collect_inputs(&file, &config.batch.extensions)?;
    assert_eq!(files, vec![file.clone()]);

    let outcome = BatchAnalyzer::new(LyricAnalyzer::with_config(config.analysis), 1)
        .analyze_path(&files[0])
        .await;
    assert_eq!(outcome, FileOutcome::InsufficientText);

    Ok(())
}

#[test]
fn test_shortStdinText_shouldBeInsufficientText() {
    let outcome = FileOutcome::from(LyricAnalyzer::new().analyze("hola\n"));
    assert_eq!(outcome, FileOutcome::InsufficientText);
}
