//! Authentication types for the Pardot API client.
//!
//! Pardot authenticates with a Salesforce bearer token plus a business unit
//! header. Obtaining the token is left to the caller; this module only holds
//! it and turns it into request headers.
//!
//! - [`Credentials`]: The token and business unit sent with every request

mod credentials;

pub use credentials::{Credentials, AUTHORIZATION_HEADER, BUSINESS_UNIT_HEADER};
