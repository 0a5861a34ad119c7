//! Error types for listing a directory tree.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Failed to walk '{}': {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to write to stdout: {0}")]
    Console(#[source] std::io::Error),

    #[error("Failed to write output file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ListError>;
