//! Error types for client configuration.
//!
//! This module contains the error type returned while building a client
//! configuration or bootstrapping a [`Swell`](crate::Swell) client.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials are rejected before any network I/O happens.
//!
//! # Example
//!
//! ```rust
//! use swell_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store id cannot be empty.
    #[error("Store id cannot be empty. All Swell API methods require a store id and API key. See https://developers.swell.is/backend-api/authentication")]
    EmptyStoreId,

    /// API key cannot be empty.
    #[error("API key cannot be empty. All Swell API methods require a store id and API key. See https://developers.swell.is/backend-api/authentication")]
    EmptyApiKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Rate limit settings are out of range.
    #[error("Invalid rate limit: {reason}")]
    InvalidRateLimit {
        /// Why the settings were rejected.
        reason: String,
    },

    /// API host URL is invalid.
    #[error("Invalid API host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.swell.store').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// The variable name.
        name: &'static str,
        /// The raw value.
        value: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClient {
        /// Description of the initialization failure.
        reason: String,
    },
}
