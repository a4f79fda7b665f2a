//! Single-header assembly
//!
//! Runs the license extractor, the system include collector and the inliner
//! over one root header and lays their results out as:
//!
//! ```text
//! <license comment>
//!
//! #include <a>
//! #include <b>
//!
//! <flattened body>
//! ```

use singles_core::{absolutize, BuildOptions, Error, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::collector::SystemIncludeCollector;
use crate::header::HeaderFile;
use crate::inliner::HeaderInliner;
use crate::patterns::DirectivePatterns;

/// A rendered single header, not yet written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amalgamation {
    /// Leading block comment of the root header, possibly empty
    pub license: String,
    /// Hoisted system include tokens
    pub system_includes: BTreeSet<String>,
    /// Flattened body as produced by the inliner
    pub body: String,
    /// File expansions that went into `body`
    pub inlined_files: usize,
}

impl fmt::Display for Amalgamation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.license)?;
        writeln!(f)?;
        for include in &self.system_includes {
            writeln!(f, "#include <{}>", include)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.body.trim())
    }
}

/// Summary of a written single header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmalgamationReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub system_includes: usize,
    pub inlined_files: usize,
    pub bytes: usize,
}

/// Header amalgamator
pub struct Amalgamator {
    patterns: DirectivePatterns,
    options: BuildOptions,
}

impl Amalgamator {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            patterns: DirectivePatterns::new(),
            options,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Leading block comment of `path`, or `""`
    pub fn license_comment(&self, path: &Path) -> Result<String> {
        let header = HeaderFile::load(path)?;
        Ok(self.patterns.license_comment(header.content()).to_string())
    }

    /// System includes reachable from `root`, in a fresh traversal
    pub fn system_includes(&self, root: &Path) -> Result<BTreeSet<String>> {
        SystemIncludeCollector::new(&self.patterns, &self.options).collect(root)
    }

    /// Flattened body of `root`, in a fresh traversal
    pub fn flatten(&self, root: &Path) -> Result<String> {
        Ok(HeaderInliner::new(&self.patterns, &self.options)
            .flatten(root)?
            .body)
    }

    /// Render the single header for `input` in memory
    pub fn render(&self, input: &Path) -> Result<Amalgamation> {
        let input = absolutize(input)?;

        let license = self.license_comment(&input)?;
        let system_includes = self.system_includes(&input)?;
        let flattened = HeaderInliner::new(&self.patterns, &self.options).flatten(&input)?;

        Ok(Amalgamation {
            license,
            system_includes,
            body: flattened.body,
            inlined_files: flattened.expanded_files,
        })
    }

    /// Render `input` and write it to `output`, creating parent directories
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn amalgamate(&self, input: &Path, output: &Path) -> Result<AmalgamationReport> {
        let input = absolutize(input)?;
        let output = absolutize(output)?;

        let amalgamation = self.render(&input)?;
        let text = amalgamation.to_string();

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&output, &text).map_err(|source| Error::Write {
            path: output.clone(),
            source,
        })?;

        info!(
            "Wrote {:?}: {} files inlined, {} system includes",
            output,
            amalgamation.inlined_files,
            amalgamation.system_includes.len()
        );

        Ok(AmalgamationReport {
            input,
            output,
            system_includes: amalgamation.system_includes.len(),
            inlined_files: amalgamation.inlined_files,
            bytes: text.len(),
        })
    }
}

impl Default for Amalgamator {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_layout() {
        let amalgamation = Amalgamation {
            license: "/* MIT */".into(),
            system_includes: ["vector", "cstddef"].iter().map(|s| s.to_string()).collect(),
            body: "int x;\n\n\n".into(),
            inlined_files: 1,
        };

        assert_eq!(
            amalgamation.to_string(),
            "/* MIT */\n\n#include <cstddef>\n#include <vector>\n\nint x;\n"
        );
    }

    #[test]
    fn test_display_without_license_or_includes() {
        let amalgamation = Amalgamation {
            license: String::new(),
            system_includes: BTreeSet::new(),
            body: "\nint x;\n\n".into(),
            inlined_files: 1,
        };

        assert_eq!(amalgamation.to_string(), "\n\n\nint x;\n");
    }
}
