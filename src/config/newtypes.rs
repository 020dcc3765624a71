//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Salesforce access token used as the Pardot bearer token.
///
/// The token is obtained by the caller through whatever Salesforce flow suits
/// them; this crate never fetches or refreshes it.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use pardot_api::AccessToken;
///
/// let token = AccessToken::new("00Dxx0000000001!AQ4AQ").unwrap();
/// assert_eq!(token.as_ref(), "00Dxx0000000001!AQ4AQ");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The Pardot business unit a request targets.
///
/// Sent on every request as the `Pardot-Business-Unit-Id` header. The value
/// is opaque to this crate and is passed through as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BusinessUnitId(String);

impl BusinessUnitId {
    /// Wraps a business unit identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for BusinessUnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BusinessUnitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BusinessUnitId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// A validated API host URL, such as `https://pi.pardot.com`.
///
/// The URL must carry an alphabetic scheme and a non-empty host. Trailing
/// slashes are stripped so that paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use pardot_api::HostUrl;
///
/// let url = HostUrl::new("https://pi.demo.pardot.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://pi.demo.pardot.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ConfigError::InvalidHostUrl { url });
        };

        let valid_scheme = !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic());
        // Host ends at port, path, query, or end of string
        let host = rest.split([':', '/', '?', '#']).next().unwrap_or_default();

        if !valid_scheme || host.is_empty() {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        let result = AccessToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_business_unit_id_passes_value_through() {
        let id = BusinessUnitId::from("0Uv000000000001");
        assert_eq!(id.as_ref(), "0Uv000000000001");
    }

    #[test]
    fn test_host_url_accepts_valid_urls() {
        let url = HostUrl::new("https://pi.pardot.com").unwrap();
        assert_eq!(url.as_ref(), "https://pi.pardot.com");

        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("https://pi.pardot.com/").unwrap();
        assert_eq!(url.as_ref(), "https://pi.pardot.com");
    }

    #[test]
    fn test_host_url_rejects_invalid_urls() {
        assert!(matches!(
            HostUrl::new("pi.pardot.com"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
        assert!(matches!(
            HostUrl::new("https://"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
        assert!(matches!(
            HostUrl::new("://pi.pardot.com"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
        assert!(matches!(
            HostUrl::new("https://:8080"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
        assert!(matches!(
            HostUrl::new("ht1ps://pi.pardot.com"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
    }
}
