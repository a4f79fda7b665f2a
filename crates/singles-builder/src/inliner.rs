//! Recursive header inliner
//!
//! Replaces every user include with the flattened body of its target,
//! dropping system includes and `#pragma once` lines. Blank lines directly
//! after a dropped or replaced line are collapsed, as are the leading blank
//! lines of each file.

use singles_core::{absolutize, BuildOptions, Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::header::HeaderFile;
use crate::patterns::{Directive, DirectivePatterns};

/// One traversal producing a flattened header body
pub struct HeaderInliner<'p> {
    patterns: &'p DirectivePatterns,
    max_depth: usize,
    visited: HashSet<PathBuf>,
    expanded: usize,
}

/// Output of a flattening traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flattened {
    /// Flattened text, ending with a newline
    pub body: String,
    /// Number of file expansions that contributed to `body`
    pub expanded_files: usize,
}

impl<'p> HeaderInliner<'p> {
    /// Create an inliner with an empty visited-set
    pub fn new(patterns: &'p DirectivePatterns, options: &BuildOptions) -> Self {
        Self {
            patterns,
            max_depth: options.max_include_depth,
            visited: HashSet::new(),
            expanded: 0,
        }
    }

    /// Flatten `root`
    pub fn flatten(mut self, root: &Path) -> Result<Flattened> {
        let root = absolutize(root)?;
        let body = self.visit(&root, 0)?;
        Ok(Flattened {
            body,
            expanded_files: self.expanded,
        })
    }

    fn visit(&mut self, path: &Path, depth: usize) -> Result<String> {
        if depth > self.max_depth {
            return Err(Error::IncludeDepthExceeded {
                path: path.to_path_buf(),
                limit: self.max_depth,
            });
        }

        let header = HeaderFile::load(path)?;
        let content = self.patterns.strip_license_comment(header.content());

        // Unlike the collector, the guard is looked for after the leading comment is gone
        if self.patterns.is_guarded(&content) && self.visited.contains(path) {
            debug!("Skipping already inlined {:?}", path);
            return Ok(String::new());
        }
        self.visited.insert(path.to_path_buf());
        self.expanded += 1;
        debug!("Inlining {:?} (depth {})", path, depth);

        let mut output = String::new();
        let mut skip_blank = true;

        for line in content.split('\n') {
            match self.patterns.classify(line) {
                Directive::Blank if skip_blank => {}
                Directive::PragmaOnce | Directive::SystemInclude(_) => {
                    skip_blank = true;
                }
                Directive::UserInclude(target) => {
                    let included = header.resolve_include(target);
                    output.push_str(&self.visit(&included, depth + 1)?);
                    skip_blank = true;
                }
                Directive::Blank | Directive::Text => {
                    output.push_str(line);
                    output.push('\n');
                    skip_blank = false;
                }
            }
        }

        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn flatten(root: &Path) -> Result<Flattened> {
        let patterns = DirectivePatterns::new();
        HeaderInliner::new(&patterns, &BuildOptions::default()).flatten(root)
    }

    #[test]
    fn test_plain_file_passes_through() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.hpp");
        fs::write(&path, "\n\nint x;\n\nint y;\n\n").unwrap();

        let flattened = flatten(&path).unwrap();
        assert_eq!(flattened.body, "int x;\n\nint y;\n\n");
        assert_eq!(flattened.expanded_files, 1);
    }

    #[test]
    fn test_blank_lines_after_dropped_lines_collapse() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.hpp");
        fs::write(&path, "#pragma once\n\n#include <a.h>\n\n\nint x;\n").unwrap();

        assert_eq!(flatten(&path).unwrap().body, "int x;\n\n");
    }

    #[test]
    fn test_user_include_replaced_in_place() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("b.hpp"), "int b_before;\n#include \"c.hpp\"\nint b_after;\n").unwrap();
        fs::write(root.join("c.hpp"), "int c;\n").unwrap();
        fs::write(root.join("main.hpp"), "#include \"b.hpp\"\n\nint main_tail;\n").unwrap();

        let flattened = flatten(&root.join("main.hpp")).unwrap();
        assert_eq!(
            flattened.body,
            "int b_before;\nint c;\n\nint b_after;\n\nint main_tail;\n\n"
        );
        assert_eq!(flattened.expanded_files, 3);
    }

    #[test]
    fn test_guarded_file_expanded_once() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.hpp"), "#pragma once\nint a;\n").unwrap();
        fs::write(root.join("main.hpp"), "#include \"a.hpp\"\n#include \"a.hpp\"\nint m;\n").unwrap();

        let flattened = flatten(&root.join("main.hpp")).unwrap();
        assert_eq!(flattened.body, "int a;\n\nint m;\n\n");
        assert_eq!(flattened.expanded_files, 2);
    }

    #[test]
    fn test_unguarded_file_expanded_every_time() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.hpp"), "int a;\n").unwrap();
        fs::write(root.join("main.hpp"), "#include \"a.hpp\"\n#include \"a.hpp\"\n").unwrap();

        let flattened = flatten(&root.join("main.hpp")).unwrap();
        assert_eq!(flattened.body, "int a;\n\nint a;\n\n\n");
        assert_eq!(flattened.expanded_files, 3);
    }

    #[test]
    fn test_leading_comment_stripped_from_each_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.hpp"), "/* a license */\n\nint a;\n").unwrap();
        fs::write(root.join("main.hpp"), "/* main license */\n#include \"a.hpp\"\n").unwrap();

        assert_eq!(flatten(&root.join("main.hpp")).unwrap().body, "int a;\n\n\n");
    }

    #[test]
    fn test_guard_inside_leading_comment_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("self.hpp"), "/* #pragma once */\n#include \"self.hpp\"\n").unwrap();

        let patterns = DirectivePatterns::new();
        let options = BuildOptions { max_include_depth: 8 };
        let err = HeaderInliner::new(&patterns, &options)
            .flatten(&root.join("self.hpp"))
            .unwrap_err();

        assert!(matches!(err, Error::IncludeDepthExceeded { limit: 8, .. }));
    }
}
