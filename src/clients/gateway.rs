//! HTTP gateway for Pardot API communication.
//!
//! This module provides the [`Gateway`] type, the single place where requests
//! are authenticated, sent, and classified.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::clients::errors::{PardotApiError, PardotError};
use crate::clients::http_request::{HttpMethod, PardotRequest};
use crate::clients::http_response::{classify, ApiResponse};
use crate::config::{ExpiredKeyHook, PardotConfig};
use crate::error::ConfigError;

/// Pardot API version used for every request.
pub const API_VERSION: u32 = 3;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Authenticated HTTP gateway to the Pardot API.
///
/// The gateway handles:
/// - URL construction from resource name, version, and sub-path
/// - Authentication headers on every request
/// - Forcing `format=json` on every request
/// - Classifying responses into JSON payloads, status codes, or API errors
/// - One retry when Pardot reports an invalid or expired key
///
/// # Thread Safety
///
/// `Gateway` is `Send + Sync`. Its credentials are read-only.
///
/// # Example
///
/// ```rust,ignore
/// use pardot_api::{AccessToken, BusinessUnitId, Gateway, PardotConfig};
///
/// let config = PardotConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .business_unit_id(BusinessUnitId::new("0Uv000000000001"))
///     .build()?;
///
/// let gateway = Gateway::new(&config)?;
/// let response = gateway.get("prospect", Some("/do/query"), None).await?;
/// ```
pub struct Gateway {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://pi.pardot.com`).
    base_uri: String,
    /// Headers included in all requests.
    default_headers: HashMap<String, String>,
    /// Signal fired before the expired-key retry.
    on_expired_key: Option<ExpiredKeyHook>,
}

// Verify Gateway is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Gateway>();
};

impl Gateway {
    /// Creates a new gateway from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderValue`] if a credential or the
    /// user agent cannot be sent as a header value, or
    /// [`ConfigError::HttpClientBuild`] if the underlying HTTP client cannot
    /// be created.
    pub fn new(config: &PardotConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Pardot API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = config.credentials().headers();
        default_headers.insert("User-Agent".to_string(), user_agent);

        if let Some(header) = default_headers
            .iter()
            .find(|(_, value)| HeaderValue::from_str(value).is_err())
            .map(|(name, _)| name.clone())
        {
            return Err(ConfigError::InvalidHeaderValue { header });
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri: config.base_uri().as_ref().to_string(),
            default_headers,
            on_expired_key: config.on_expired_key().cloned(),
        })
    }

    /// Returns the base URI for this gateway.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for a resource.
    ///
    /// The result is `<base>/api/<resource>/version/3`, followed by
    /// `sub_path` verbatim when given.
    ///
    /// ```rust
    /// # use pardot_api::{AccessToken, BusinessUnitId, Gateway, PardotConfig};
    /// # let config = PardotConfig::builder()
    /// #     .access_token(AccessToken::new("token").unwrap())
    /// #     .business_unit_id(BusinessUnitId::new("bu"))
    /// #     .build()
    /// #     .unwrap();
    /// let gateway = Gateway::new(&config).unwrap();
    /// assert_eq!(
    ///     gateway.full_path("prospect", Some("/do/query")),
    ///     "https://pi.pardot.com/api/prospect/version/3/do/query"
    /// );
    /// ```
    #[must_use]
    pub fn full_path(&self, resource: &str, sub_path: Option<&str>) -> String {
        let full = format!("{}/api/{resource}/version/{API_VERSION}", self.base_uri);
        match sub_path {
            Some(sub_path) if !sub_path.is_empty() => format!("{full}{sub_path}"),
            _ => full,
        }
    }

    /// Sends a GET request.
    ///
    /// # Arguments
    ///
    /// * `resource` - The resource collection (e.g., "prospect")
    /// * `sub_path` - Optional path appended after the version (e.g., "/do/query")
    /// * `params` - Optional query parameters; `format=json` is always added
    ///
    /// # Errors
    ///
    /// Returns [`PardotError::Api`] if Pardot reports an error,
    /// [`PardotError::Decode`] for malformed JSON, and
    /// [`PardotError::Network`] for transport failures.
    pub async fn get(
        &self,
        resource: &str,
        sub_path: Option<&str>,
        params: Option<HashMap<String, String>>,
    ) -> Result<ApiResponse, PardotError> {
        self.get_with_retries(resource, sub_path, params, 0).await
    }

    /// Sends a GET request with an explicit retry count.
    ///
    /// A `retries` value other than `0` disables the expired-key retry.
    ///
    /// # Errors
    ///
    /// See [`Gateway::get`].
    pub async fn get_with_retries(
        &self,
        resource: &str,
        sub_path: Option<&str>,
        params: Option<HashMap<String, String>>,
        retries: u32,
    ) -> Result<ApiResponse, PardotError> {
        let request = Self::build_request(HttpMethod::Get, resource, sub_path, params, None, retries);
        self.request(request).await
    }

    /// Sends a POST request.
    ///
    /// # Arguments
    ///
    /// * `resource` - The resource collection (e.g., "prospect")
    /// * `sub_path` - Optional path appended after the version
    /// * `params` - Optional query parameters; `format=json` is always added
    /// * `body` - Optional form-encoded body fields
    ///
    /// # Errors
    ///
    /// See [`Gateway::get`].
    pub async fn post(
        &self,
        resource: &str,
        sub_path: Option<&str>,
        params: Option<HashMap<String, String>>,
        body: Option<HashMap<String, String>>,
    ) -> Result<ApiResponse, PardotError> {
        self.post_with_retries(resource, sub_path, params, body, 0)
            .await
    }

    /// Sends a POST request with an explicit retry count.
    ///
    /// # Errors
    ///
    /// See [`Gateway::get`].
    pub async fn post_with_retries(
        &self,
        resource: &str,
        sub_path: Option<&str>,
        params: Option<HashMap<String, String>>,
        body: Option<HashMap<String, String>>,
        retries: u32,
    ) -> Result<ApiResponse, PardotError> {
        let request =
            Self::build_request(HttpMethod::Post, resource, sub_path, params, body, retries);
        self.request(request).await
    }

    /// Sends a request, retrying once if Pardot reports an expired key.
    ///
    /// The retry only happens when the error message is exactly
    /// `"Invalid API key or user key"` and `request.retries` is `0`. The
    /// outcome of the retry is returned as-is, so a second failure propagates.
    ///
    /// # Errors
    ///
    /// See [`Gateway::get`].
    pub async fn request(&self, request: PardotRequest) -> Result<ApiResponse, PardotError> {
        match self.send(&request).await {
            Err(PardotError::Api(err)) if err.is_invalid_key() && request.retries == 0 => {
                self.handle_expired_key(&err, &request).await
            }
            outcome => outcome,
        }
    }

    fn build_request(
        method: HttpMethod,
        resource: &str,
        sub_path: Option<&str>,
        params: Option<HashMap<String, String>>,
        body: Option<HashMap<String, String>>,
        retries: u32,
    ) -> PardotRequest {
        let mut builder = PardotRequest::builder(method, resource).retries(retries);
        if let Some(sub_path) = sub_path {
            builder = builder.sub_path(sub_path);
        }
        if let Some(params) = params {
            builder = builder.params(params);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder.build()
    }

    async fn handle_expired_key(
        &self,
        err: &PardotApiError,
        request: &PardotRequest,
    ) -> Result<ApiResponse, PardotError> {
        tracing::warn!(
            "Pardot rejected the access token for {} {}; retrying once",
            request.http_method,
            request.resource
        );
        if let Some(hook) = &self.on_expired_key {
            hook(err);
        }

        self.send(&request.as_retry()).await
    }

    /// Performs a single HTTP exchange and classifies the response.
    async fn send(&self, request: &PardotRequest) -> Result<ApiResponse, PardotError> {
        let url = self.full_path(&request.resource, request.sub_path.as_deref());

        tracing::debug!(
            "Sending {} request to {} (retries: {})",
            request.http_method,
            url,
            request.retries
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = req_builder.query(&request.params);

        if let Some(body) = &request.body {
            req_builder = req_builder.form(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body_text = res.text().await?;

        classify(code, content_type.as_deref(), &body_text)
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();

        f.debug_struct("Gateway")
            .field("base_uri", &self.base_uri)
            .field("headers", &header_names)
            .field("on_expired_key", &self.on_expired_key.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BusinessUnitId, HostUrl};

    fn create_test_config() -> PardotConfig {
        PardotConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .business_unit_id(BusinessUnitId::new("0Uv000000000001"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_full_path_without_sub_path() {
        let gateway = Gateway::new(&create_test_config()).unwrap();
        assert_eq!(
            gateway.full_path("prospect", None),
            "https://pi.pardot.com/api/prospect/version/3"
        );
    }

    #[test]
    fn test_full_path_appends_sub_path_verbatim() {
        let gateway = Gateway::new(&create_test_config()).unwrap();
        assert_eq!(
            gateway.full_path("prospect", Some("/do/query")),
            "https://pi.pardot.com/api/prospect/version/3/do/query"
        );
        assert_eq!(
            gateway.full_path("email", Some("/do/send/prospect_id/42")),
            "https://pi.pardot.com/api/email/version/3/do/send/prospect_id/42"
        );
    }

    #[test]
    fn test_full_path_uses_configured_base_uri() {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .business_unit_id(BusinessUnitId::new("bu"))
            .base_uri(HostUrl::new("http://127.0.0.1:9000/").unwrap())
            .build()
            .unwrap();
        let gateway = Gateway::new(&config).unwrap();

        assert_eq!(
            gateway.full_path("list", None),
            "http://127.0.0.1:9000/api/list/version/3"
        );
    }

    #[test]
    fn test_authentication_headers() {
        let gateway = Gateway::new(&create_test_config()).unwrap();
        let headers = gateway.default_headers();

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
        assert_eq!(
            headers.get("Pardot-Business-Unit-Id"),
            Some(&"0Uv000000000001".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let gateway = Gateway::new(&create_test_config()).unwrap();
        let user_agent = gateway.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Pardot API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .business_unit_id(BusinessUnitId::new("bu"))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let gateway = Gateway::new(&config).unwrap();

        let user_agent = gateway.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_business_unit_with_newline_is_rejected() {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .business_unit_id(BusinessUnitId::new("0Uv0000\nX-Injected: 1"))
            .build()
            .unwrap();

        let result = Gateway::new(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue { ref header }) if header == "Pardot-Business-Unit-Id"
        ));
    }

    #[test]
    fn test_access_token_with_control_character_is_rejected() {
        let config = PardotConfig::builder()
            .access_token(AccessToken::new("tok\ren").unwrap())
            .business_unit_id(BusinessUnitId::new("bu"))
            .build()
            .unwrap();

        let result = Gateway::new(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue { ref header }) if header == "Authorization"
        ));
    }

    #[test]
    fn test_debug_output_hides_token() {
        let gateway = Gateway::new(&create_test_config()).unwrap();
        let debug_output = format!("{gateway:?}");
        assert!(!debug_output.contains("test-access-token"));
        assert!(debug_output.contains("Authorization"));
    }

    #[test]
    fn test_build_request_forces_json_format() {
        let mut params = HashMap::new();
        params.insert("format".to_string(), "xml".to_string());

        let request =
            Gateway::build_request(HttpMethod::Get, "list", None, Some(params), None, 0);
        assert_eq!(request.params.get("format"), Some(&"json".to_string()));
    }
}
