//! Account resource wrapper.
//!
//! The account is the Pardot organization itself, so none of these calls
//! take an id.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::Params;

const RESOURCE: &str = "account";

/// Operations on the `account` resource.
#[derive(Clone, Debug)]
pub struct Accounts {
    gateway: Arc<Gateway>,
}

impl Accounts {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Reads the account.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self) -> Result<ApiResponse, PardotError> {
        self.gateway.post(RESOURCE, Some("/do/read"), None, None).await
    }

    /// Updates the account.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn update(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway
            .post(RESOURCE, Some("/do/update"), params, None)
            .await
    }

    /// Describes the account's fields.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn describe(&self) -> Result<ApiResponse, PardotError> {
        self.gateway
            .post(RESOURCE, Some("/do/describe"), None, None)
            .await
    }
}
