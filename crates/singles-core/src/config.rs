//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;

/// Default nesting limit for include traversal
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 256;

/// Options shared by every amalgamation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Maximum include nesting before the traversal gives up.
    ///
    /// Unguarded cyclic includes never terminate on their own; this turns
    /// them into an error instead of a stack overflow.
    pub max_include_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }
}

/// One header to amalgamate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Root header
    pub input: PathBuf,
    /// Single header to write
    pub output: PathBuf,
}

/// Batch of targets loaded from a YAML manifest
///
/// ```yaml
/// options:
///   max_include_depth: 64
/// targets:
///   - input: headers/meta.hpp
///     output: develop/singles/headers/meta.hpp
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub options: BuildOptions,
    pub targets: Vec<Target>,
}

impl Manifest {
    /// Parse a manifest from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;

        if manifest.targets.is_empty() {
            return Err(Error::Config("manifest lists no targets".into()));
        }
        if manifest.options.max_include_depth == 0 {
            return Err(Error::Config("max_include_depth must be positive".into()));
        }

        Ok(manifest)
    }

    /// Load a manifest file, resolving relative target paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest = Self::from_yaml(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for target in &mut manifest.targets {
            target.input = normalize(&base.join(&target.input));
            target.output = normalize(&base.join(&target.output));
        }

        Ok(manifest)
    }
}
