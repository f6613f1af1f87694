//! Error types for the photoshoot harness
//!
//! Step-level failures never escape the runner; these errors either end up
//! inside an EXCEPTION outcome or abort start-up (bad config, bad base URL).

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Transport Errors ===
    #[error("HTTP transport error: {}", with_causes(.0))]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    // === Response Errors ===
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a decoding error for a named payload
    pub fn decode(context: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.to_string(),
            source,
        }
    }

    /// Create an invalid base URL error
    pub fn invalid_base_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// An error's message followed by each underlying cause, `: `-separated
fn with_causes(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
