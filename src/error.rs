use thiserror::Error;

/// Custom error types for bellhop
#[derive(Debug, Error)]
pub enum BellhopError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("Failed to initialize HTTP client: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

