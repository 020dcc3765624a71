//! Error types for Pardot API calls.
//!
//! - [`PardotApiError`]: The API answered with a JSON payload carrying an `err` marker
//! - [`PardotError`]: Unified error returned by every gateway call
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::PardotError;
//!
//! match api.prospects.read_by_email("jane@example.com", None).await {
//!     Ok(response) => println!("Prospect: {:?}", response.json()),
//!     Err(PardotError::Api(e)) => println!("Pardot rejected the call: {}", e.message),
//!     Err(PardotError::Decode(e)) => println!("Malformed JSON: {e}"),
//!     Err(PardotError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Message Pardot returns when the bearer token is invalid or has expired.
pub const INVALID_KEY_MESSAGE: &str = "Invalid API key or user key";

/// Error reported by the Pardot API inside a JSON response body.
///
/// Pardot signals most failures with a 200 status and an `err` field, so
/// this error is raised by inspecting the payload rather than the status.
///
/// # Example
///
/// ```rust
/// use pardot_api::PardotApiError;
/// use serde_json::json;
///
/// let error = PardotApiError::from_json(json!({
///     "@attributes": {"stat": "fail", "version": 1, "err_code": 1},
///     "err": "Invalid API key or user key"
/// }));
///
/// assert!(error.is_invalid_key());
/// assert_eq!(error.err_code, Some(1));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct PardotApiError {
    /// The error message taken from the `err` field.
    pub message: String,
    /// Numeric code from `@attributes.err_code`, when present.
    pub err_code: Option<i64>,
    /// The full JSON payload returned by the API.
    pub raw_json: Value,
}

/// `@attributes.err_code` arrives as a number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrCode {
    Number(i64),
    Text(String),
}

impl PardotApiError {
    /// Builds an error from a JSON error payload.
    ///
    /// `err` and `@attributes.err_code` are read independently, so a
    /// malformed attributes block never hides the message.
    #[must_use]
    pub fn from_json(raw_json: Value) -> Self {
        let message = match raw_json.get("err") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => raw_json.to_string(),
        };

        let err_code = raw_json
            .pointer("/@attributes/err_code")
            .and_then(|code| ErrCode::deserialize(code).ok())
            .and_then(|code| match code {
                ErrCode::Number(code) => Some(code),
                ErrCode::Text(code) => code.trim().parse().ok(),
            });

        Self {
            message,
            err_code,
            raw_json,
        }
    }

    /// Returns `true` if this error reports an invalid or expired key.
    #[must_use]
    pub fn is_invalid_key(&self) -> bool {
        self.message == INVALID_KEY_MESSAGE
    }
}

/// Unified error type for gateway calls.
#[derive(Debug, Error)]
pub enum PardotError {
    /// The API reported an error in its JSON payload.
    #[error(transparent)]
    Api(#[from] PardotApiError),

    /// The response claimed to be JSON but could not be parsed.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl PardotError {
    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&PardotApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_taken_from_err_field() {
        let error = PardotApiError::from_json(json!({"err": "Invalid prospect ID"}));
        assert_eq!(error.message, "Invalid prospect ID");
        assert_eq!(error.to_string(), "Invalid prospect ID");
        assert!(error.err_code.is_none());
    }

    #[test]
    fn test_err_code_parsed_from_attributes() {
        let error = PardotApiError::from_json(json!({
            "@attributes": {"stat": "fail", "err_code": 4},
            "err": "Invalid prospect ID"
        }));
        assert_eq!(error.err_code, Some(4));

        let error = PardotApiError::from_json(json!({
            "@attributes": {"err_code": "15"},
            "err": "Login failed"
        }));
        assert_eq!(error.err_code, Some(15));
    }

    #[test]
    fn test_unexpected_attributes_shape_keeps_err_message() {
        let error = PardotApiError::from_json(json!({
            "@attributes": "fail",
            "err": INVALID_KEY_MESSAGE
        }));
        assert_eq!(error.message, INVALID_KEY_MESSAGE);
        assert!(error.is_invalid_key());
        assert!(error.err_code.is_none());

        let error = PardotApiError::from_json(json!({
            "@attributes": {"err_code": {"nested": true}},
            "err": "Invalid prospect ID"
        }));
        assert_eq!(error.message, "Invalid prospect ID");
        assert!(error.err_code.is_none());
    }

    #[test]
    fn test_non_string_err_is_serialized() {
        let error = PardotApiError::from_json(json!({"err": ["first", "second"]}));
        assert_eq!(error.message, r#"["first","second"]"#);
    }

    #[test]
    fn test_raw_json_is_preserved() {
        let payload = json!({"err": "boom", "extra": {"detail": 1}});
        let error = PardotApiError::from_json(payload.clone());
        assert_eq!(error.raw_json, payload);
    }

    #[test]
    fn test_is_invalid_key_requires_exact_message() {
        assert!(PardotApiError::from_json(json!({"err": INVALID_KEY_MESSAGE})).is_invalid_key());
        assert!(
            !PardotApiError::from_json(json!({"err": "invalid api key or user key"}))
                .is_invalid_key()
        );
        assert!(!PardotApiError::from_json(json!({"err": "Invalid prospect ID"})).is_invalid_key());
    }

    #[test]
    fn test_pardot_error_wraps_api_error() {
        let error: PardotError = PardotApiError::from_json(json!({"err": "boom"})).into();
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.as_api_error().map(|e| e.message.as_str()), Some("boom"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &PardotApiError::from_json(json!({"err": "x"}));
        let _ = api_error;
    }
}
