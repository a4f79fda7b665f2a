//! Directive patterns
//!
//! Line-oriented recognition of the few preprocessor constructs the
//! amalgamation cares about:
//! - Leading license block comment (`/* ... */`)
//! - User includes (`#include "path"`)
//! - System includes (`#include <token>`)
//! - Include guards (`#pragma once`)
//!
//! Nothing here evaluates the preprocessor. Directives inside comments or
//! disabled `#if` branches are recognized like any other line.

use regex::Regex;
use std::borrow::Cow;

/// Classification of a single header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with `#pragma once`
    PragmaOnce,
    /// `#include "target"`, target relative to the including file
    UserInclude(&'a str),
    /// `#include <token>`, token kept opaque
    SystemInclude(&'a str),
    /// Anything else, passed through verbatim
    Text,
}

/// Compiled directive patterns
pub struct DirectivePatterns {
    license_comment: Regex,
    user_include: Regex,
    system_include: Regex,
    pragma_once: Regex,
    pragma_once_line: Regex,
}

impl DirectivePatterns {
    /// Compile the directive patterns
    pub fn new() -> Self {
        Self {
            // Greedy: runs to the last `*/` of the content
            license_comment: Regex::new(r"(?s)^/\*.*\*/").expect("license comment pattern"),
            user_include: Regex::new(r#"#\s*include\s*"(.*)""#).expect("user include pattern"),
            system_include: Regex::new(r"#\s*include\s*<(.*)>").expect("system include pattern"),
            pragma_once: Regex::new(r"#\s*pragma\s+once").expect("pragma once pattern"),
            pragma_once_line: Regex::new(r"^#\s*pragma\s+once").expect("pragma once line pattern"),
        }
    }

    /// The block comment opening `content`, or `""`
    pub fn license_comment<'a>(&self, content: &'a str) -> &'a str {
        self.license_comment
            .find(content)
            .map_or("", |m| m.as_str())
    }

    /// `content` with its opening block comment removed
    pub fn strip_license_comment<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.license_comment.replace(content, "")
    }

    /// Whether `#pragma once` appears anywhere in `content`
    pub fn is_guarded(&self, content: &str) -> bool {
        self.pragma_once.is_match(content)
    }

    /// Target of the first user include on `line`
    pub fn user_include<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture(&self.user_include, line)
    }

    /// Token of the first system include on `line`
    pub fn system_include<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture(&self.system_include, line)
    }

    /// Classify `line`, checking blank, pragma, user include, system include in that order
    pub fn classify<'a>(&self, line: &'a str) -> Directive<'a> {
        if line.trim().is_empty() {
            Directive::Blank
        } else if self.pragma_once_line.is_match(line) {
            Directive::PragmaOnce
        } else if let Some(target) = self.user_include(line) {
            Directive::UserInclude(target)
        } else if let Some(token) = self.system_include(line) {
            Directive::SystemInclude(token)
        } else {
            Directive::Text
        }
    }
}

impl Default for DirectivePatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
