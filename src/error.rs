// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BplintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        source: regex::Error,
    },

    #[error("Invalid breakpoint '{0}': names must be non-empty and contain no whitespace")]
    InvalidBreakpoint(String),

    #[error("Invalid separator {0:?}: must be non-empty and contain no whitespace")]
    InvalidSeparator(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BplintError>;

// Allow `?` on std::io::Error by converting to BplintError::Io with unknown path.
impl From<std::io::Error> for BplintError {
    fn from(source: std::io::Error) -> Self {
        BplintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
