//! Error types for the short.io API SDK.
//!
//! This module contains the configuration error raised when a client or its
//! credentials are constructed with invalid values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Per-call errors live in
//! [`ShortioError`](crate::links::ShortioError).
//!
//! # Example
//!
//! ```rust
//! use shortio_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
///
/// Every variant represents an invalid configuration: a client cannot be
/// built until the offending value is fixed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Domain cannot be empty.
    #[error("Domain cannot be empty. Please provide a domain managed by your short.io account.")]
    EmptyDomain,

    /// Domain identifier cannot be empty.
    #[error("Domain ID cannot be empty. Please provide the numeric ID of your short.io domain.")]
    EmptyDomainId,

    /// Domain identifier cannot be zero.
    #[error("Domain ID cannot be zero. Please provide the numeric ID of your short.io domain.")]
    ZeroDomainId,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid short.io API key.")]
    EmptyApiKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.short.io').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialise HTTP client: {reason}")]
    HttpClientInit {
        /// The reason reported by the HTTP stack.
        reason: String,
    },
}
