//! Configuration types for the Pardot API client.
//!
//! # Overview
//!
//! - [`PardotConfig`]: The configuration consumed by [`Gateway`](crate::Gateway)
//! - [`PardotConfigBuilder`]: A builder for constructing [`PardotConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`BusinessUnitId`]: The Pardot business unit targeted by requests
//! - [`HostUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use pardot_api::{AccessToken, BusinessUnitId, PardotConfig};
//!
//! let config = PardotConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .business_unit_id(BusinessUnitId::new("0Uv000000000001"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://pi.pardot.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BusinessUnitId, HostUrl};

use std::fmt;
use std::sync::Arc;

use crate::auth::Credentials;
use crate::clients::PardotApiError;
use crate::error::ConfigError;

/// Default Pardot API host.
pub const DEFAULT_BASE_URI: &str = "https://pi.pardot.com";

/// Callback invoked when the API reports an invalid or expired key.
///
/// The hook is a signal only. Credentials stay fixed for the lifetime of the
/// client, so callers that refresh tokens should build a new client afterwards.
pub type ExpiredKeyHook = Arc<dyn Fn(&PardotApiError) + Send + Sync>;

/// Configuration for the Pardot API client.
///
/// # Thread Safety
///
/// `PardotConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone)]
pub struct PardotConfig {
    credentials: Credentials,
    base_uri: HostUrl,
    user_agent_prefix: Option<String>,
    on_expired_key: Option<ExpiredKeyHook>,
}

impl PardotConfig {
    /// Creates a new builder for constructing a `PardotConfig`.
    #[must_use]
    pub fn builder() -> PardotConfigBuilder {
        PardotConfigBuilder::new()
    }

    /// Returns the credentials sent with every request.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API host.
    #[must_use]
    pub const fn base_uri(&self) -> &HostUrl {
        &self.base_uri
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the expired-key hook, if configured.
    #[must_use]
    pub const fn on_expired_key(&self) -> Option<&ExpiredKeyHook> {
        self.on_expired_key.as_ref()
    }
}

impl fmt::Debug for PardotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PardotConfig")
            .field("credentials", &self.credentials)
            .field("base_uri", &self.base_uri)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("on_expired_key", &self.on_expired_key.is_some())
            .finish()
    }
}

// Verify PardotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PardotConfig>();
};

/// Builder for constructing [`PardotConfig`] instances.
///
/// Required fields are `access_token` and `business_unit_id`.
///
/// # Defaults
///
/// - `base_uri`: `https://pi.pardot.com`
/// - `user_agent_prefix`: `None`
/// - `on_expired_key`: `None`
///
/// # Example
///
/// ```rust
/// use pardot_api::{AccessToken, BusinessUnitId, HostUrl, PardotConfig};
///
/// let config = PardotConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .business_unit_id(BusinessUnitId::new("0Uv000000000001"))
///     .base_uri(HostUrl::new("https://pi.demo.pardot.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .on_expired_key(|err| eprintln!("token needs refreshing: {err}"))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct PardotConfigBuilder {
    access_token: Option<AccessToken>,
    business_unit_id: Option<BusinessUnitId>,
    base_uri: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    on_expired_key: Option<ExpiredKeyHook>,
}

impl PardotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the business unit id (required).
    #[must_use]
    pub fn business_unit_id(mut self, id: BusinessUnitId) -> Self {
        self.business_unit_id = Some(id);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn base_uri(mut self, uri: HostUrl) -> Self {
        self.base_uri = Some(uri);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Registers a callback fired before the single expired-key retry.
    #[must_use]
    pub fn on_expired_key<F>(mut self, hook: F) -> Self
    where
        F: Fn(&PardotApiError) + Send + Sync + 'static,
    {
        self.on_expired_key = Some(Arc::new(hook));
        self
    }

    /// Builds the [`PardotConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` or
    /// `business_unit_id` are not set.
    pub fn build(self) -> Result<PardotConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;
        let business_unit_id = self
            .business_unit_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "business_unit_id",
            })?;

        let base_uri = match self.base_uri {
            Some(uri) => uri,
            None => HostUrl::new(DEFAULT_BASE_URI)?,
        };

        Ok(PardotConfig {
            credentials: Credentials::new(access_token, business_unit_id),
            base_uri,
            user_agent_prefix: self.user_agent_prefix,
            on_expired_key: self.on_expired_key,
        })
    }
}

impl fmt::Debug for PardotConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PardotConfigBuilder")
            .field("access_token", &self.access_token)
            .field("business_unit_id", &self.business_unit_id)
            .field("base_uri", &self.base_uri)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("on_expired_key", &self.on_expired_key.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = PardotConfigBuilder::new()
            .business_unit_id(BusinessUnitId::new("bu"))
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_requires_business_unit_id() {
        let result = PardotConfigBuilder::new().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "business_unit_id"
            })
        ));
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = PardotConfig::builder()
            .access_token(token())
            .business_unit_id(BusinessUnitId::new("bu"))
            .build()
            .unwrap();

        assert_eq!(config.base_uri().as_ref(), DEFAULT_BASE_URI);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.on_expired_key().is_none());
        assert_eq!(config.credentials().business_unit_id().as_ref(), "bu");
    }

    #[test]
    fn test_builder_with_all_options() {
        let config = PardotConfig::builder()
            .access_token(token())
            .business_unit_id(BusinessUnitId::new("bu"))
            .base_uri(HostUrl::new("https://pi.demo.pardot.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .on_expired_key(|_| {})
            .build()
            .unwrap();

        assert_eq!(config.base_uri().as_ref(), "https://pi.demo.pardot.com");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert!(config.on_expired_key().is_some());
    }

    #[test]
    fn test_debug_output_hides_token() {
        let config = PardotConfig::builder()
            .access_token(token())
            .business_unit_id(BusinessUnitId::new("bu"))
            .build()
            .unwrap();

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("test-token"));
        assert!(debug_output.contains("*****"));
    }
}
