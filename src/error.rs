//! Error type shared by input loading, configuration, and output.
//!
//! The renderer itself cannot fail; everything here happens around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrlistError {
    /// Reading or writing a file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read results from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// A results document is not valid JSON or does not match the shape.
    #[error("invalid results in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no input matched '{0}'")]
    NoInputMatched(String),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl ErrlistError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ErrlistError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ErrlistError>;
