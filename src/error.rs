//! Library error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WgError>;

#[derive(Debug, Error)]
pub enum WgError {
    /// An input config could not be opened or read.
    #[error("cannot read config file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    #[error("invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("cannot write merged config {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The async runtime backing DNS lookups could not be started.
    #[error("failed to start DNS runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
