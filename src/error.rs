//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. Every
//! failure mode a caller can hit is a distinct variant; nothing is folded
//! into a generic catch-all.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Solver not configured. Set an API key via update() or GEMINI_API_KEY")]
    NotConfigured,

    #[error("Failed to read screenshot {path}: {source}")]
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Generation provider error: {0}")]
    Upstream(String),

    #[error("Response violates the solution schema: {0}")]
    SchemaViolation(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the offending path for image read failures.
    pub fn failed_path(&self) -> Option<&std::path::Path> {
        match self {
            Error::ImageRead { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
