//! Error types for the UI controller.

use thiserror::Error;

/// Message shown when the server fails without explaining why.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Failure of a single generation request.
///
/// `Display` is exactly the text shown to the user after the `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request body could not be encoded.
    #[error("Could not encode request: {0}")]
    Encode(String),

    /// No response was received (network down, blocked by the browser, unreachable host).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON the API promises.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// A success status arrived without a link to download.
    #[error("The server response did not include a download link.")]
    MissingDownloadUrl,
}

impl ApiError {
    /// Builds a status failure, falling back to the generic message when the server sent none.
    pub fn status(status: u16, message: Option<&str>) -> Self {
        Self::Status {
            status,
            message: message.unwrap_or(FALLBACK_ERROR_MESSAGE).to_string(),
        }
    }
}

/// Invalid controller configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{0}' cannot be used as a base (it must be http:// or https://)")]
    UnusableBaseUrl(String),

    #[error("Unknown stale response policy '{0}': expected 'discard' or 'render'")]
    InvalidStalePolicy(String),
}
