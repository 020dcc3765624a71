//! Visitor activity resource wrapper.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::Params;

const RESOURCE: &str = "visitorActivity";

/// Operations on the `visitorActivity` collection.
#[derive(Clone, Debug)]
pub struct VisitorActivities {
    gateway: Arc<Gateway>,
}

impl VisitorActivities {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries visitor activities matching the given search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query(&self, params: Option<Params>) -> Result<ApiResponse, PardotError> {
        self.gateway.get(RESOURCE, Some("/do/query"), params).await
    }

    /// Reads the visitor activity with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.get(RESOURCE, Some(&path), None).await
    }
}
