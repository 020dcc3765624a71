//! Top-level Pardot API client.
//!
//! [`PardotApi`] owns one shared [`Gateway`] and exposes every resource
//! wrapper as a named field.

use std::sync::Arc;

use crate::clients::Gateway;
use crate::config::{AccessToken, BusinessUnitId, PardotConfig};
use crate::error::ConfigError;
use crate::resources::{
    Accounts, Campaigns, Emails, Lists, Opportunities, Prospects, Users, VisitorActivities,
    Visitors, Visits,
};

/// Client for the Pardot API.
///
/// # Example
///
/// ```rust,ignore
/// use pardot_api::PardotApi;
///
/// let api = PardotApi::new("salesforce-access-token", "0Uv000000000001")?;
///
/// let prospects = api.prospects.query(None).await?;
/// let account = api.accounts.read().await?;
///
/// // Raw access for endpoints without a wrapper
/// let response = api.gateway().get("form", Some("/do/query"), None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PardotApi {
    gateway: Arc<Gateway>,
    /// The `account` resource.
    pub accounts: Accounts,
    /// The `campaign` resource.
    pub campaigns: Campaigns,
    /// The `email` resource.
    pub emails: Emails,
    /// The `list` resource.
    pub lists: Lists,
    /// The `opportunity` resource.
    pub opportunities: Opportunities,
    /// The `prospect` resource.
    pub prospects: Prospects,
    /// The `user` resource.
    pub users: Users,
    /// The `visitorActivity` resource.
    pub visitor_activities: VisitorActivities,
    /// The `visitor` resource.
    pub visitors: Visitors,
    /// The `visit` resource.
    pub visits: Visits,
}

impl PardotApi {
    /// Creates a client for the given token and business unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty,
    /// [`ConfigError::InvalidHeaderValue`] if the token or business unit
    /// cannot be sent as a header, or [`ConfigError::HttpClientBuild`] if the
    /// HTTP client cannot be created.
    pub fn new(
        access_token: impl Into<String>,
        business_unit_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new(access_token)?)
            .business_unit_id(BusinessUnitId::new(business_unit_id))
            .build()?;

        Self::from_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderValue`] or
    /// [`ConfigError::HttpClientBuild`] as described on [`Gateway::new`].
    pub fn from_config(config: &PardotConfig) -> Result<Self, ConfigError> {
        let gateway = Arc::new(Gateway::new(config)?);

        Ok(Self {
            accounts: Accounts::new(Arc::clone(&gateway)),
            campaigns: Campaigns::new(Arc::clone(&gateway)),
            emails: Emails::new(Arc::clone(&gateway)),
            lists: Lists::new(Arc::clone(&gateway)),
            opportunities: Opportunities::new(Arc::clone(&gateway)),
            prospects: Prospects::new(Arc::clone(&gateway)),
            users: Users::new(Arc::clone(&gateway)),
            visitor_activities: VisitorActivities::new(Arc::clone(&gateway)),
            visitors: Visitors::new(Arc::clone(&gateway)),
            visits: Visits::new(Arc::clone(&gateway)),
            gateway,
        })
    }

    /// Returns the shared gateway for direct GET and POST calls.
    #[must_use]
    pub const fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_token() {
        let result = PardotApi::new("", "0Uv000000000001");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_new_builds_default_gateway() {
        let api = PardotApi::new("token", "0Uv000000000001").unwrap();
        assert_eq!(api.gateway().base_uri(), "https://pi.pardot.com");
    }

    #[test]
    fn test_wrappers_share_one_gateway() {
        let api = PardotApi::new("token", "bu").unwrap();
        // The client plus ten wrappers hold the gateway
        assert_eq!(Arc::strong_count(api.gateway()), 11);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PardotApi>();
    }
}
