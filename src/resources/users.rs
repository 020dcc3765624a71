//! User resource wrapper.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{segment, Params};

const RESOURCE: &str = "user";

/// Operations on the `user` collection.
#[derive(Clone, Debug)]
pub struct Users {
    gateway: Arc<Gateway>,
}

impl Users {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries users matching the given search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway.get(RESOURCE, Some("/do/query"), params).await
    }

    /// Reads the user with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read_by_email(&self, email: &str) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/email/{}", segment(email));
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }

    /// Reads the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read_by_id(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }
}
