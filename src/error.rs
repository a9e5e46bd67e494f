//! Error types for playlist generation

use std::path::PathBuf;

/// Errors raised while loading the config or generating playlists
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Playlist '{name}' has unknown type '{kind}' (expected search or convert)")]
    InvalidSpec { name: String, kind: String },

    #[error("Invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type used throughout the generator
pub type Result<T> = std::result::Result<T, Error>;
