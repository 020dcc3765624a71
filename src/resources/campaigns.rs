//! Campaign resource wrapper.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{with_param, Params};

const RESOURCE: &str = "campaign";

/// Operations on the `campaign` collection.
#[derive(Clone, Debug)]
pub struct Campaigns {
    gateway: Arc<Gateway>,
}

impl Campaigns {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries campaigns matching the given search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway.get(RESOURCE, Some("/do/query"), params).await
    }

    /// Creates a campaign with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn create(
        &self,
        name: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let params = with_param(params, "name", name);
        self.gateway
            .post(RESOURCE, Some("/do/create"), Some(params), None)
            .await
    }

    /// Reads the campaign with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }

    /// Updates the campaign with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn update(&self, id: u64, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/update/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }
}
