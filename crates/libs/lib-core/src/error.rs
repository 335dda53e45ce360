//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the tutor core.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Input rejection**
//!    - [`Validation`](AppError::Validation) - blank user turn
//!
//! 2. **Transport/Protocol failures** - all recovered locally as an apology turn
//!    - [`Network`](AppError::Network) - backend unreachable, request aborted
//!    - [`Status`](AppError::Status) - non-2xx response
//!    - [`Decode`](AppError::Decode) - body is not a valid chat response
//!
//! 3. **Setup**
//!    - [`Config`](AppError::Config) - invalid host configuration
//!
//! None of these are fatal: the conversation stays usable after every one.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(AppError::Validation("message is empty".to_string()));
//!     }
//!     Ok(text)
//! }
//!
//! assert!(require_text("   ").is_err());
//! ```
//!
//! ## Error Conversion
//!
//! - `From<serde_json::Error>` - body decode failures
//! - `From<reqwest::Error>` - network/status/decode, classified by the error kind (feature `http-client`)

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type for the tutor core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Host configuration is unusable (bad API URL, unreadable environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected input, e.g. a user turn with blank content.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned status {0}")]
    Status(u16),

    /// The response body could not be parsed as a chat response.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(feature = "http-client")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            AppError::Status(status.as_u16())
        } else if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AppError::Status(502).to_string(), "Backend returned status 502");
        assert_eq!(
            AppError::Config("missing scheme".to_string()).to_string(),
            "Configuration error: missing scheme"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Decode(_)));
    }
}
