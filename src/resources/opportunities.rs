//! Opportunity resource wrapper.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{segment, Params};

const RESOURCE: &str = "opportunity";

/// Operations on the `opportunity` collection.
///
/// Creating an opportunity requires `name`, `value`, and `probability`
/// parameters and a prospect to attach it to.
#[derive(Clone, Debug)]
pub struct Opportunities {
    gateway: Arc<Gateway>,
}

impl Opportunities {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries opportunities matching the given search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway.get(RESOURCE, Some("/do/query"), params).await
    }

    /// Creates an opportunity for the prospect with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn create_by_email(
        &self,
        prospect_email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/create/prospect_email/{}", segment(prospect_email));
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Creates an opportunity for the prospect with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn create_by_id(
        &self,
        prospect_id: u64,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/create/prospect_id/{prospect_id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Reads the opportunity with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }

    /// Updates the opportunity with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn update(&self, id: u64, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/update/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Deletes the opportunity with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn delete(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/delete/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }

    /// Restores a deleted opportunity.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn undelete(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/undelete/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }
}
