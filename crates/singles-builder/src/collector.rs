//! System include collector
//!
//! Walks the user-include graph from a root header and gathers every
//! `#include <...>` token reachable from it.

use singles_core::{absolutize, BuildOptions, Error, Result};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::header::HeaderFile;
use crate::patterns::DirectivePatterns;

/// One traversal collecting system include tokens
pub struct SystemIncludeCollector<'p> {
    patterns: &'p DirectivePatterns,
    max_depth: usize,
    visited: HashSet<PathBuf>,
}

impl<'p> SystemIncludeCollector<'p> {
    /// Create a collector with an empty visited-set
    pub fn new(patterns: &'p DirectivePatterns, options: &BuildOptions) -> Self {
        Self {
            patterns,
            max_depth: options.max_include_depth,
            visited: HashSet::new(),
        }
    }

    /// Collect the system includes reachable from `root`
    pub fn collect(mut self, root: &Path) -> Result<BTreeSet<String>> {
        let root = absolutize(root)?;
        self.visit(&root, 0)
    }

    fn visit(&mut self, path: &Path, depth: usize) -> Result<BTreeSet<String>> {
        if depth > self.max_depth {
            return Err(Error::IncludeDepthExceeded {
                path: path.to_path_buf(),
                limit: self.max_depth,
            });
        }

        let header = HeaderFile::load(path)?;

        // Guard check runs on the raw content, comments included
        if self.patterns.is_guarded(header.content()) && self.visited.contains(path) {
            debug!("Skipping already collected {:?}", path);
            return Ok(BTreeSet::new());
        }
        self.visited.insert(path.to_path_buf());

        let mut includes = BTreeSet::new();
        for line in header.content().split('\n') {
            if let Some(target) = self.patterns.user_include(line) {
                let included = header.resolve_include(target);
                includes.extend(self.visit(&included, depth + 1)?);
            }
            if let Some(token) = self.patterns.system_include(line) {
                if token.is_empty() {
                    warn!("Empty system include in {:?}", path);
                }
                includes.insert(token.to_string());
            }
        }

        Ok(includes)
    }
}
