//! Visitor resource wrapper.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{with_param, Params};

const RESOURCE: &str = "visitor";

/// Operations on the `visitor` collection.
#[derive(Clone, Debug)]
pub struct Visitors {
    gateway: Arc<Gateway>,
}

impl Visitors {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries visitors matching the given search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway.get(RESOURCE, Some("/do/query"), params).await
    }

    /// Links an anonymous visitor to a prospect.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn assign(&self, id: u64, prospect_id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/assign/id/{id}");
        let params = with_param(None, "prospect_id", prospect_id.to_string());
        self.gateway
            .post(RESOURCE, Some(&path), Some(params), None)
            .await
    }

    /// Reads the visitor with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.get(RESOURCE, Some(&path), None).await
    }
}
