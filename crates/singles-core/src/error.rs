//! Error types for singles

use std::path::PathBuf;
use thiserror::Error;

/// Singles error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Include depth limit of {limit} exceeded at {} (cyclic includes without #pragma once?)", path.display())]
    IncludeDepthExceeded { path: PathBuf, limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for singles
pub type Result<T> = std::result::Result<T, Error>;
