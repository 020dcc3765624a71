//! Prospect resource wrapper.
//!
//! Prospects are the people tracked by Pardot. They can be addressed either by
//! their Pardot id or by email address.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{segment, with_param, Params};

const RESOURCE: &str = "prospect";

/// Operations on the `prospect` collection.
///
/// # Example
///
/// ```rust,ignore
/// let response = api.prospects.read_by_email("jane@example.com", None).await?;
/// if let Some(body) = response.json() {
///     println!("Prospect id: {}", body["prospect"]["id"]);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Prospects {
    gateway: Arc<Gateway>,
}

impl Prospects {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries prospects matching the given search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway.get(RESOURCE, Some("/do/query"), params).await
    }

    /// Creates a prospect with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn create_by_email(
        &self,
        email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/create/email/{}", segment(email));
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Reads the prospect with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read_by_email(
        &self,
        email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/email/{}", segment(email));
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Reads the prospect with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read_by_id(
        &self,
        id: u64,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Updates the prospect with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn update_by_email(
        &self,
        email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/update/email/{}", segment(email));
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Updates the prospect with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn update_by_id(
        &self,
        id: u64,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/update/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Creates or updates the prospect with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn upsert_by_email(
        &self,
        email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/upsert/email/{}", segment(email));
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Deletes the prospect with the given id.
    ///
    /// Pardot answers a successful delete without a body, so this normally
    /// returns [`ApiResponse::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn delete_by_id(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/delete/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }

    /// Assigns the prospect to a Pardot user.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn assign_by_id(
        &self,
        id: u64,
        user_id: u64,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/assign/id/{id}");
        let params = with_param(params, "user_id", user_id.to_string());
        self.gateway
            .post(RESOURCE, Some(&path), Some(params), None)
            .await
    }

    /// Removes the prospect's user assignment.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn unassign_by_id(
        &self,
        id: u64,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/unassign/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }
}
