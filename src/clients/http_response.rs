//! Response types for the Pardot API client.
//!
//! Pardot answers either with a JSON document or, for some actions, with no
//! body at all. [`ApiResponse`] models both outcomes and [`classify`] decides
//! between them from the `Content-Type` header.

use serde_json::Value;

use crate::clients::errors::{PardotApiError, PardotError};

/// The only content type treated as a JSON payload.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A successful response from the Pardot API.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// The parsed JSON body.
    Json(Value),
    /// The HTTP status code of a response without a JSON body.
    Status(u16),
}

impl ApiResponse {
    /// Returns the JSON body, if this response carried one.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Status(_) => None,
        }
    }

    /// Consumes the response, returning the JSON body if present.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Status(_) => None,
        }
    }

    /// Returns the status code, if this response had no JSON body.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Json(_) => None,
            Self::Status(code) => Some(*code),
        }
    }
}

/// Classifies a raw HTTP response.
///
/// - `Content-Type` exactly `application/json`: the body is parsed. A truthy
///   `err` field becomes [`PardotError::Api`], otherwise the parsed value is
///   returned as [`ApiResponse::Json`].
/// - Anything else: [`ApiResponse::Status`] with the HTTP status code.
///
/// # Errors
///
/// Returns [`PardotError::Api`] for JSON error payloads and
/// [`PardotError::Decode`] if a JSON body fails to parse.
///
/// # Example
///
/// ```rust
/// use pardot_api::clients::{classify, ApiResponse};
/// use serde_json::json;
///
/// let response = classify(200, Some("application/json"), r#"{"result": 1}"#).unwrap();
/// assert_eq!(response, ApiResponse::Json(json!({"result": 1})));
///
/// let response = classify(204, Some("text/plain"), "").unwrap();
/// assert_eq!(response, ApiResponse::Status(204));
/// ```
pub fn classify(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<ApiResponse, PardotError> {
    if content_type != Some(JSON_CONTENT_TYPE) {
        return Ok(ApiResponse::Status(status));
    }

    let json: Value = serde_json::from_str(body)?;
    if json.get("err").is_some_and(is_truthy) {
        return Err(PardotApiError::from_json(json).into());
    }

    Ok(ApiResponse::Json(json))
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays, and
/// objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
