/*!
 * Concurrent analysis of many lyric files.
 *
 * Files are read asynchronously and each analysis runs on the blocking
 * thread pool, with at most `max_concurrent` files in flight. Results come
 * back in input order whatever order they finished in.
 */

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::analysis::{AnalysisReport, LyricAnalyzer};

/// What happened to a single file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// The file was analyzed
    Analyzed(Box<AnalysisReport>),

    /// The file was read but holds too little text to analyze
    InsufficientText,

    /// The file could not be read or analyzed
    Failed(String),
}

impl From<Option<AnalysisReport>> for FileOutcome {
    fn from(report: Option<AnalysisReport>) -> Self {
        match report {
            Some(report) => Self::Analyzed(Box::new(report)),
            None => Self::InsufficientText,
        }
    }
}

/// Result of analyzing one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileAnalysis {
    /// The report, if the file was analyzed
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.outcome {
            FileOutcome::Analyzed(report) => Some(report),
            _ => None,
        }
    }
}

/// Analyzes a set of files with bounded concurrency
pub struct BatchAnalyzer {
    analyzer: LyricAnalyzer,
    max_concurrent: usize,
}

impl BatchAnalyzer {
    /// Create a batch analyzer; a concurrency of 0 is treated as 1.
    pub fn new(analyzer: LyricAnalyzer, max_concurrent: usize) -> Self {
        Self {
            analyzer,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Maximum number of files processed at once
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Analyze a single file without a progress callback.
    pub async fn analyze_path(&self, path: &Path) -> FileOutcome {
        analyze_file(self.analyzer.clone(), path).await
    }

    /// Analyze every file, reporting `(done, total)` after each one.
    pub async fn analyze_files(
        &self,
        paths: &[PathBuf],
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Vec<FileAnalysis> {
        let total = paths.len();
        let processed = Arc::new(AtomicUsize::new(0));

        let mut results = stream::iter(paths.iter().cloned().enumerate())
            .map(|(index, path)| {
                let analyzer = self.analyzer.clone();
                let processed = processed.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    let outcome = analyze_file(analyzer, &path).await;

                    let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total);

                    (index, FileAnalysis { path, outcome })
                }
            })
            .buffer_unordered(self.max_concurrent)
            .collect::<Vec<_>>()
            .await;

        // Restore input order
        results.sort_by_key(|(index, _)| *index);
        results.into_iter().map(|(_, analysis)| analysis).collect()
    }
}

async fn analyze_file(analyzer: LyricAnalyzer, path: &Path) -> FileOutcome {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            return FileOutcome::Failed(e.to_string());
        }
    };

    let joined = tokio::task::spawn_blocking(move || analyzer.analyze(&content)).await;

    match joined {
        Ok(report) => {
            let outcome = FileOutcome::from(report);
            if outcome == FileOutcome::InsufficientText {
                debug!("Not enough text in {:?}", path);
            } else {
                debug!("Analyzed {:?}", path);
            }
            outcome
        }
        Err(e) => FileOutcome::Failed(format!("Analysis task failed: {}", e)),
    }
}
