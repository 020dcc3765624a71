//! Resource wrappers for the Pardot API collections.
//!
//! Each wrapper holds a shared [`Gateway`] and turns its arguments into a
//! resource name, sub-path, and parameters. Wrappers never build URLs or
//! headers themselves.
//!
//! | Wrapper | Resource |
//! |---------|----------|
//! | [`Accounts`] | `account` |
//! | [`Campaigns`] | `campaign` |
//! | [`Emails`] | `email` |
//! | [`Lists`] | `list` |
//! | [`Opportunities`] | `opportunity` |
//! | [`Prospects`] | `prospect` |
//! | [`Users`] | `user` |
//! | [`VisitorActivities`] | `visitorActivity` |
//! | [`Visitors`] | `visitor` |
//! | [`Visits`] | `visit` |
//!
//! [`Gateway`]: crate::Gateway

mod accounts;
mod campaigns;
mod emails;
mod lists;
mod opportunities;
mod prospects;
mod users;
mod visitor_activities;
mod visitors;
mod visits;

pub use accounts::Accounts;
pub use campaigns::Campaigns;
pub use emails::Emails;
pub use lists::Lists;
pub use opportunities::Opportunities;
pub use prospects::Prospects;
pub use users::Users;
pub use visitor_activities::VisitorActivities;
pub use visitors::Visitors;
pub use visits::Visits;

use std::collections::HashMap;

/// Query parameters accepted by wrapper methods.
pub type Params = HashMap<String, String>;

/// Adds `key=value` to optional caller parameters.
pub(crate) fn with_param(
    params: Option<Params>,
    key: &str,
    value: impl Into<String>,
) -> Params {
    let mut params = params.unwrap_or_default();
    params.insert(key.to_string(), value.into());
    params
}

/// Percent-encodes a caller-supplied value used as a path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_param_creates_params() {
        let params = with_param(None, "user_id", "7");
        assert_eq!(params.get("user_id"), Some(&"7".to_string()));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_with_param_overrides_caller_value() {
        let mut caller = Params::new();
        caller.insert("user_id".to_string(), "1".to_string());
        caller.insert("fields".to_string(), "email".to_string());

        let params = with_param(Some(caller), "user_id", "7");
        assert_eq!(params.get("user_id"), Some(&"7".to_string()));
        assert_eq!(params.get("fields"), Some(&"email".to_string()));
    }

    #[test]
    fn test_segment_encodes_email() {
        assert_eq!(segment("jane+test@example.com"), "jane%2Btest%40example.com");
        assert_eq!(segment("plain"), "plain");
    }
}
