//! # Pardot API Rust Client
//!
//! A Rust client for the Pardot marketing-automation API, providing
//! authenticated GET/POST access to Pardot resources with typed errors.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PardotConfig`] and [`PardotConfigBuilder`]
//! - Validated newtypes for credentials and the API host
//! - An async [`Gateway`] that authenticates, sends, and classifies requests
//! - One automatic retry when Pardot reports an expired access token
//! - Thin wrappers for the Pardot resource collections via [`PardotApi`]
//!
//! Obtaining the Salesforce access token is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pardot_api::{ApiResponse, PardotApi};
//!
//! let api = PardotApi::new("salesforce-access-token", "0Uv000000000001")?;
//!
//! match api.prospects.read_by_email("jane@example.com", None).await? {
//!     ApiResponse::Json(body) => println!("{}", body["prospect"]["id"]),
//!     ApiResponse::Status(code) => println!("status {code}"),
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use pardot_api::{AccessToken, BusinessUnitId, HostUrl, PardotConfig};
//!
//! let config = PardotConfig::builder()
//!     .access_token(AccessToken::new("salesforce-access-token").unwrap())
//!     .business_unit_id(BusinessUnitId::new("0Uv000000000001"))
//!     .base_uri(HostUrl::new("https://pi.demo.pardot.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Responses and Errors
//!
//! Every call returns `Result<ApiResponse, PardotError>`:
//!
//! - [`ApiResponse::Json`]: the response was `application/json` without an `err` field
//! - [`ApiResponse::Status`]: the response had no JSON body; the status code is returned
//! - [`PardotError::Api`]: Pardot reported an error inside its JSON payload
//! - [`PardotError::Network`]: the transport failed
//!
//! ## Expired Tokens
//!
//! When Pardot answers `"Invalid API key or user key"`, the gateway fires the
//! optional `on_expired_key` hook, logs a warning, and repeats the request
//! exactly once with the same credentials. A second failure is returned to
//! the caller.

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use auth::Credentials;
pub use client::PardotApi;
pub use config::{
    AccessToken, BusinessUnitId, ExpiredKeyHook, HostUrl, PardotConfig, PardotConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    ApiResponse, Gateway, HttpMethod, PardotApiError, PardotError, PardotRequest,
    PardotRequestBuilder,
};
