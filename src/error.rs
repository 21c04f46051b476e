use thiserror::Error;

/// Custom error types for catalog-search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid service base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Suggestion service returned HTTP {0}")]
    Status(u16),

    #[error("Malformed suggestion response: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SearchError::Status(status.as_u16())
        } else if err.is_decode() {
            SearchError::Parse(err.to_string())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
