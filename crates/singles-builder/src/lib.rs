//! Singles Builder
//!
//! Amalgamates a tree of C/C++ headers into one standalone header.
//!
//! ## Modules
//!
//! - `patterns` - Line classification for includes, guards and the license comment
//! - `header` - Header loading and include path resolution
//! - `collector` - System include collection over the include graph
//! - `inliner` - Recursive flattening of user includes
//! - `amalgamate` - Assembly of the final single header

pub mod amalgamate;
pub mod collector;
pub mod header;
pub mod inliner;
pub mod patterns;

pub use amalgamate::{Amalgamation, AmalgamationReport, Amalgamator};
pub use collector::SystemIncludeCollector;
pub use header::HeaderFile;
pub use inliner::{Flattened, HeaderInliner};
pub use patterns::{Directive, DirectivePatterns};
pub use singles_core::{BuildOptions, Manifest, Target};

use singles_core::Result;
use std::path::Path;

/// Amalgamate `input` into `output` with default options
pub fn amalgamate(input: &Path, output: &Path) -> Result<AmalgamationReport> {
    Amalgamator::default().amalgamate(input, output)
}
