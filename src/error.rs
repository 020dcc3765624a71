//! Error types for the Pardot API client.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to the API live in [`crate::clients`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Configuration errors are never retried.
//!
//! # Example
//!
//! ```rust
//! use pardot_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Salesforce access token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://pi.pardot.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A configured value cannot be sent as an HTTP header.
    #[error("Invalid value for header '{header}'. Header values cannot contain control characters such as newlines.")]
    InvalidHeaderValue {
        /// The name of the header whose value was rejected.
        header: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// Description of the transport failure.
        reason: String,
    },
}
