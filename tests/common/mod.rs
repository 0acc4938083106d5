/*!
 * Common test utilities for the lyricscope test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Four lines mixing love, happiness and nature imagery
pub const SAMPLE_LYRICS: &str = "El amor es un viaje
Mi corazón canta de alegría
El viento susurra secretos
La luna sonríe esta noche";

/// A short song with section markers and a repeated chorus
pub const MARKED_SONG: &str = "[Verso 1]
Camino bajo la lluvia
siento la lluvia en la piel
[Coro]
libre como el viento
volar es mi papel
[Coro]
libre como el viento";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Route log output through env_logger, honoring RUST_LOG
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
