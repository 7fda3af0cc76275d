// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeniusError>;

#[derive(Debug, Error)]
pub enum GeniusError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from Genius API: {0}")]
    MalformedBody(String),

    #[error("Genius API error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Pagination limit exceeded: results did not end within {max_pages} pages")]
    PaginationLimitExceeded { max_pages: u32 },
}

impl GeniusError {
    /// Network-level failures and undecodable bodies.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::MalformedBody(_))
    }

    /// Failures reported by the provider inside a well-formed envelope.
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }
}

impl From<serde_json::Error> for GeniusError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedBody(error.to_string())
    }
}
