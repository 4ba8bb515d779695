//! Catalyst Center integration: endpoint selection and the REST client.

pub mod client;
pub mod url;

pub use client::{AuthToken, CatalystClient, CatalystError, UpdateOutcome};
pub use url::build_update_url;
