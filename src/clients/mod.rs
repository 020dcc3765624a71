//! HTTP client types for Pardot API communication.
//!
//! This module provides the core request/response pipeline: building
//! authenticated requests, sending them, and classifying the responses.
//!
//! # Overview
//!
//! - [`Gateway`]: The async gateway performing GET and POST calls
//! - [`PardotRequest`]: A single call to a Pardot resource
//! - [`ApiResponse`]: A JSON payload or a bare status code
//! - [`PardotError`]: Unified error for gateway calls
//! - [`PardotApiError`]: An error reported inside a JSON payload
//!
//! # Example
//!
//! ```rust,ignore
//! use pardot_api::clients::{ApiResponse, Gateway};
//!
//! let gateway = Gateway::new(&config)?;
//!
//! match gateway.get("prospect", Some("/do/query"), None).await? {
//!     ApiResponse::Json(body) => println!("Prospects: {body}"),
//!     ApiResponse::Status(code) => println!("No body, status {code}"),
//! }
//! ```
//!
//! # Retry Behavior
//!
//! Pardot reports an expired bearer token as the JSON error
//! `"Invalid API key or user key"`. The gateway retries such a call exactly
//! once; every other error is returned immediately.

mod errors;
mod gateway;
mod http_request;
mod http_response;

pub use errors::{PardotApiError, PardotError, INVALID_KEY_MESSAGE};
pub use gateway::{Gateway, API_VERSION, SDK_VERSION};
pub use http_request::{HttpMethod, PardotRequest, PardotRequestBuilder, FORMAT_JSON, FORMAT_PARAM};
pub use http_response::{classify, ApiResponse, JSON_CONTENT_TYPE};
