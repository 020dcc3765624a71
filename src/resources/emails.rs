//! Email resource wrapper.
//!
//! Sends one-to-one and list emails. Pardot requires either an
//! `email_template_id` or the `text_content`, `name`, `subject`, and sender
//! parameters; these are passed through `params` unchanged.

use std::sync::Arc;

use crate::clients::{ApiResponse, Gateway, PardotError};
use crate::resources::{segment, Params};

const RESOURCE: &str = "email";

/// Operations on the `email` collection.
#[derive(Clone, Debug)]
pub struct Emails {
    gateway: Arc<Gateway>,
}

impl Emails {
    /// Creates the wrapper over a shared gateway.
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Reads the email with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn read(&self, id: u64) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/read/id/{id}");
        self.gateway.post(RESOURCE, Some(&path), None, None).await
    }

    /// Sends an email to the prospect with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn send_to_prospect_by_id(
        &self,
        prospect_id: u64,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/send/prospect_id/{prospect_id}");
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Sends an email to the prospect with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn send_to_prospect_by_email(
        &self,
        prospect_email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let path = format!("/do/send/prospect_email/{}", segment(prospect_email));
        self.gateway.post(RESOURCE, Some(&path), params, None).await
    }

    /// Sends an email to every prospect on the given lists.
    ///
    /// The ids are sent as indexed `list_ids[n]` parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PardotError`] if the call fails.
    pub async fn send_to_list(
        &self,
        list_ids: &[u64],
        params: Option<Params>,
    ) -> Result<ApiResponse, PardotError> {
        let mut params = params.unwrap_or_default();
        for (index, id) in list_ids.iter().enumerate() {
            params.insert(format!("list_ids[{index}]"), id.to_string());
        }
        self.gateway
            .post(RESOURCE, Some("/do/send"), Some(params), None)
            .await
    }
}
