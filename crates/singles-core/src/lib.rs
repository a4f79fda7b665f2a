//! Singles Core
//!
//! Core types shared by the singles header amalgamation tool.

pub mod config;
pub mod error;
pub mod path;

pub use config::{BuildOptions, Manifest, Target};
pub use error::{Error, Result};
pub use path::absolutize;
