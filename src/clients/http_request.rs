//! Request types for the Pardot API client.
//!
//! This module provides the [`PardotRequest`] type and its builder for
//! describing a single call to a Pardot resource.

use std::collections::HashMap;
use std::fmt;

/// Query parameter forced onto every request.
pub const FORMAT_PARAM: &str = "format";

/// Value of [`FORMAT_PARAM`]; Pardot answers in XML without it.
pub const FORMAT_JSON: &str = "json";

/// HTTP methods used by the Pardot API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reading and querying.
    Get,
    /// HTTP POST method for actions that change data.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A single call to a Pardot resource.
///
/// Use [`PardotRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use pardot_api::{HttpMethod, PardotRequest};
///
/// let request = PardotRequest::builder(HttpMethod::Get, "prospect")
///     .sub_path("/do/query")
///     .param("limit", "200")
///     .build();
///
/// assert_eq!(request.params.get("format"), Some(&"json".to_string()));
/// assert_eq!(request.retries, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PardotRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resource collection name (e.g., "prospect").
    pub resource: String,
    /// Path appended verbatim after the version segment (e.g., "/do/query").
    pub sub_path: Option<String>,
    /// Query parameters, always including `format=json`.
    pub params: HashMap<String, String>,
    /// Form-encoded body fields for POST requests.
    pub body: Option<HashMap<String, String>>,
    /// How many expired-key retries have already been spent on this call.
    pub retries: u32,
}

impl PardotRequest {
    /// Creates a new builder for the given method and resource.
    #[must_use]
    pub fn builder(method: HttpMethod, resource: impl Into<String>) -> PardotRequestBuilder {
        PardotRequestBuilder::new(method, resource)
    }

    /// Returns a copy of this request marked as the expired-key retry.
    #[must_use]
    pub fn as_retry(&self) -> Self {
        Self {
            retries: self.retries + 1,
            ..self.clone()
        }
    }
}

/// Builder for constructing [`PardotRequest`] instances.
#[derive(Debug)]
pub struct PardotRequestBuilder {
    http_method: HttpMethod,
    resource: String,
    sub_path: Option<String>,
    params: HashMap<String, String>,
    body: Option<HashMap<String, String>>,
    retries: u32,
}

impl PardotRequestBuilder {
    fn new(method: HttpMethod, resource: impl Into<String>) -> Self {
        Self {
            http_method: method,
            resource: resource.into(),
            sub_path: None,
            params: HashMap::new(),
            body: None,
            retries: 0,
        }
    }

    /// Sets the sub-path appended after the version segment.
    #[must_use]
    pub fn sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets the form body sent with a POST request.
    #[must_use]
    pub fn body(mut self, body: HashMap<String, String>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets how many expired-key retries have already been spent.
    ///
    /// Any value other than `0` disables the retry.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Builds the [`PardotRequest`], forcing `format=json` into the parameters.
    #[must_use]
    pub fn build(self) -> PardotRequest {
        let mut params = self.params;
        params.insert(FORMAT_PARAM.to_string(), FORMAT_JSON.to_string());

        PardotRequest {
            http_method: self.http_method,
            resource: self.resource,
            sub_path: self.sub_path,
            params,
            body: self.body,
            retries: self.retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_build_forces_json_format() {
        let request = PardotRequest::builder(HttpMethod::Get, "list").build();
        assert_eq!(request.params.get(FORMAT_PARAM), Some(&"json".to_string()));
        assert_eq!(request.params.len(), 1);
    }

    #[test]
    fn test_build_overwrites_caller_format() {
        let request = PardotRequest::builder(HttpMethod::Get, "list")
            .param("format", "xml")
            .param("limit", "50")
            .build();

        assert_eq!(request.params.get("format"), Some(&"json".to_string()));
        assert_eq!(request.params.get("limit"), Some(&"50".to_string()));
    }

    #[test]
    fn test_params_replaces_earlier_params_but_keeps_format() {
        let mut params = HashMap::new();
        params.insert("format".to_string(), "xml".to_string());

        let request = PardotRequest::builder(HttpMethod::Post, "prospect")
            .param("dropped", "1")
            .params(params)
            .build();

        assert!(!request.params.contains_key("dropped"));
        assert_eq!(request.params.get("format"), Some(&"json".to_string()));
    }

    #[test]
    fn test_builder_defaults() {
        let request = PardotRequest::builder(HttpMethod::Get, "prospect").build();
        assert_eq!(request.resource, "prospect");
        assert!(request.sub_path.is_none());
        assert!(request.body.is_none());
        assert_eq!(request.retries, 0);
    }

    #[test]
    fn test_as_retry_increments_retries_only() {
        let mut body = HashMap::new();
        body.insert("first_name".to_string(), "Jane".to_string());

        let request = PardotRequest::builder(HttpMethod::Post, "prospect")
            .sub_path("/do/update/id/1")
            .body(body)
            .build();
        let retry = request.as_retry();

        assert_eq!(retry.retries, 1);
        assert_eq!(retry.resource, request.resource);
        assert_eq!(retry.sub_path, request.sub_path);
        assert_eq!(retry.params, request.params);
        assert_eq!(retry.body, request.body);
    }
}
