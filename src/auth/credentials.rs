//! Request credentials for the Pardot API.
//!
//! This module provides the [`Credentials`] type holding the bearer token and
//! business unit sent with every request.

use std::collections::HashMap;

use crate::config::{AccessToken, BusinessUnitId};

/// Header carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header identifying the Pardot business unit whose data is targeted.
pub const BUSINESS_UNIT_HEADER: &str = "Pardot-Business-Unit-Id";

/// Authentication state for Pardot API calls.
///
/// Credentials are immutable once created. The token is supplied by the
/// caller and is never refreshed by this crate.
///
/// # Example
///
/// ```rust
/// use pardot_api::{AccessToken, BusinessUnitId, Credentials};
///
/// let credentials = Credentials::new(
///     AccessToken::new("my-token").unwrap(),
///     BusinessUnitId::new("0Uv000000000001"),
/// );
///
/// let headers = credentials.headers();
/// assert_eq!(headers["Authorization"], "Bearer my-token");
/// assert_eq!(headers["Pardot-Business-Unit-Id"], "0Uv000000000001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    access_token: AccessToken,
    business_unit_id: BusinessUnitId,
}

impl Credentials {
    /// Creates credentials from a token and business unit.
    #[must_use]
    pub const fn new(access_token: AccessToken, business_unit_id: BusinessUnitId) -> Self {
        Self {
            access_token,
            business_unit_id,
        }
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the business unit id.
    #[must_use]
    pub const fn business_unit_id(&self) -> &BusinessUnitId {
        &self.business_unit_id
    }

    /// Builds the authentication headers sent on every request.
    #[must_use]
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::with_capacity(2);
        headers.insert(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {}", self.access_token.as_ref()),
        );
        headers.insert(
            BUSINESS_UNIT_HEADER.to_string(),
            self.business_unit_id.as_ref().to_string(),
        );
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new(
            AccessToken::new("test-token").unwrap(),
            BusinessUnitId::new("0Uv000000000001"),
        )
    }

    #[test]
    fn test_headers_include_bearer_token() {
        let headers = credentials().headers();
        assert_eq!(
            headers.get(AUTHORIZATION_HEADER),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_headers_include_business_unit() {
        let headers = credentials().headers();
        assert_eq!(
            headers.get(BUSINESS_UNIT_HEADER),
            Some(&"0Uv000000000001".to_string())
        );
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let debug_output = format!("{:?}", credentials());
        assert!(!debug_output.contains("test-token"));
    }

    #[test]
    fn test_credentials_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Credentials>();
    }
}
