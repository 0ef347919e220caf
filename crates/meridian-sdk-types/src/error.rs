//! Error types for the Meridian SDK.
//!
//! A single [`MeridianError`] enum covers every failure the SDK surfaces.
//! Collaborator errors are never swallowed: transport failures keep their
//! HTTP status and body, and the poller's timeout is its own variant so
//! callers can tell "the chain never answered in time" apart from "the
//! transport broke".

use std::time::Duration;
use thiserror::Error;

/// A specialized Result type for Meridian SDK operations.
pub type MeridianResult<T> = Result<T, MeridianError>;

/// The main error type for the Meridian SDK.
#[derive(Error, Debug)]
pub enum MeridianError {
    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during BCS serialization/deserialization
    #[error("BCS error: {0}")]
    Bcs(#[from] bcs::Error),

    /// Error occurred during URL parsing
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Error occurred during hex encoding/decoding
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Invalid account address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid type tag format
    #[error("Invalid type tag: {0}")]
    InvalidTypeTag(String),

    /// The API returned a non-2xx response; status and body are preserved
    #[error("API error ({status_code}): {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message or raw body from the API
        message: String,
        /// Optional machine-readable error code from the API
        error_code: Option<String>,
    },

    /// The caller supplied conflicting or invalid options; no network call
    /// was attempted
    #[error("Usage error: {0}")]
    Usage(String),

    /// The poller's deadline elapsed before the transaction reached a
    /// terminal state
    #[error("Transaction {hash} not committed within {timeout:?}")]
    PollTimeout {
        /// The hash that was being watched
        hash: String,
        /// The configured poll timeout
        timeout: Duration,
    },

    /// A response did not match the expected shape
    #[error("Decode error in {context}: {message}")]
    Decode {
        /// What was being decoded (endpoint, field, or index)
        context: String,
        /// What went wrong
        message: String,
    },

    /// An operation requires a collaborator that was not configured
    #[error("The {0} client is not configured for this network")]
    Unconfigured(&'static str),

    /// Internal SDK error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl MeridianError {
    /// Creates a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Creates an API error from response details.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
            error_code: None,
        }
    }

    /// Creates a decode error naming the offending context.
    pub fn decode(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Returns true if this is a "not found" API response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Api {
                status_code: 404,
                ..
            }
        )
    }

    /// Returns true if this is a poll timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::PollTimeout { .. })
    }

    /// Returns true if this is a usage error (reported before any network
    /// call).
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
