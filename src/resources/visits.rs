//! Visit resource wrapper.
//!
//! Visit queries must be narrowed by visit, visitor, or prospect ids; Pardot
//! rejects an unfiltered visit query.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{with_param, Params};

const RESOURCE: &str = "visit";

/// Operations on the `visit` collection.
#[derive(Clone, Debug)]
pub struct Visits {
    gateway: Arc<Gateway>,
}

impl Visits {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Queries visits by visit id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query_by_ids(
        &self,
        ids: &[u64],
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        self.query_by("ids", ids, params).await
    }

    /// Queries visits by visitor id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query_by_visitor_ids(
        &self,
        visitor_ids: &[u64],
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        self.query_by("visitor_ids", visitor_ids, params).await
    }

    /// Queries visits by prospect id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn query_by_prospect_ids(
        &self,
        prospect_ids: &[u64],
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        self.query_by("prospect_ids", prospect_ids, params).await
    }

    /// Reads the visit with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.get(RESOURCE, Some(&path), None).await
    }

    async fn query_by(
        &self,
        key: &str,
        ids: &[u64],
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let params = with_param(params, key, join_ids(ids));
        self.gateway
            .get(RESOURCE, Some("/do/query"), Some(params))
            .await
    }
}

/// Joins ids into the comma-separated form Pardot expects.
fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 22, 333]), "1,22,333");
        assert_eq!(join_ids(&[5]), "5");
        assert_eq!(join_ids(&[]), "");
    }
}
