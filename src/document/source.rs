use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// Synchronous document content capability. A read either returns the full
/// text of the document or fails; there is no partial read.
pub trait DocumentSource {
    fn read(&self, id: &str) -> Result<String>;
}

/// Resolves document identifiers as paths relative to a root directory.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn read(&self, id: &str) -> Result<String> {
        fs::read_to_string(self.root.join(id)).map_err(|source| {
            EngineError::DocumentUnavailable {
                id: id.to_string(),
                source,
            }
        })
    }
}

/// Loads a one-entry-per-line input file (the document list or the noise
/// word list), trimming entries and skipping blank lines.
pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}
