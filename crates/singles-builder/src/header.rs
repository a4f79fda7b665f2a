//! Header file loading

use singles_core::path::normalize;
use singles_core::{Error, Result};
use std::path::{Path, PathBuf};

/// A header read from disk
#[derive(Debug, Clone)]
pub struct HeaderFile {
    path: PathBuf,
    content: String,
}

impl HeaderFile {
    /// Read a header, normalizing line endings to `\n` and trimming surrounding whitespace
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_source(path.to_path_buf(), &raw))
    }

    /// Build a header from in-memory source
    pub fn from_source(path: PathBuf, source: &str) -> Self {
        let content = source.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            path,
            content: content.trim().to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Absolute path of a user include target, relative to this header's directory
    pub fn resolve_include(&self, target: &str) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        normalize(&dir.join(target))
    }
}
