use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::InputError;

// @module: Lyric file discovery and reading

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @checks: Extension is one of the accepted lyric extensions (case-insensitive)
    pub fn is_lyrics_file<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
        match path.as_ref().extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy();
                extensions
                    .iter()
                    .any(|wanted| ext.eq_ignore_ascii_case(wanted.trim_start_matches('.')))
            }
            None => false,
        }
    }

    /// Find lyric files under a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && Self::is_lyrics_file(path, extensions) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Resolve an input path to the list of files to analyze.
    ///
    /// A file is returned as-is whatever its extension; a directory is
    /// searched recursively for files with one of `extensions`.
    pub fn collect_inputs<P: AsRef<Path>>(
        path: P,
        extensions: &[String],
    ) -> std::result::Result<Vec<PathBuf>, InputError> {
        let path = path.as_ref();

        if Self::file_exists(path) {
            return Ok(vec![path.to_path_buf()]);
        }

        if !Self::dir_exists(path) {
            return Err(InputError::NotFound(path.display().to_string()));
        }

        let files = Self::find_files(path, extensions)
            .map_err(|e| InputError::Unreadable(format!("{}: {}", path.display(), e)))?;

        if files.is_empty() {
            return Err(InputError::Unsupported(format!(
                "no files with extensions [{}] in {}",
                extensions.join(", "),
                path.display()
            )));
        }

        Ok(files)
    }
}
