//! Temporary JSON documents for CLI and config suites.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// JSON file living in its own temporary directory, removed on drop.
#[derive(Debug)]
pub struct JsonFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl JsonFixture {
    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `contents` to `<tempdir>/<name>`.
///
/// # Errors
/// Returns an error when the directory or file cannot be created.
pub fn write_json_fixture(name: &str, contents: &str) -> Result<JsonFixture> {
    let dir = TempDir::new().context("failed to create fixture directory")?;
    let path = dir.path().join(name);
    fs::write(&path, contents)
        .with_context(|| format!("failed to write fixture {}", path.display()))?;
    Ok(JsonFixture { _dir: dir, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_files_disappear_with_their_guard() {
        let fixture = write_json_fixture("items.json", "[]").expect("fixture");
        let path = fixture.path().to_path_buf();
        assert_eq!(fs::read_to_string(&path).expect("readable"), "[]");
        drop(fixture);
        assert!(!path.exists());
    }
}
