//! Error types shared by both services

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid percent-encoded path '{path}': {source}")]
    InvalidPath {
        path: String,
        source: std::str::Utf8Error,
    },

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidRoute { pattern: String, reason: String },
}

impl Error {
    pub fn invalid_route(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
