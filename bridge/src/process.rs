//! Webhook processing flow.
//!
//! One inbound NetBox message runs the whole flow: verify the signature,
//! pull the interface identity out of the payload, then push the description
//! to Catalyst Center. Messages are handled independently; nothing is queued
//! or retried, so replaying the same payload just repeats the same update.

use serde_json::Value;
use tracing::{info, warn};

use crate::catalyst::{build_update_url, CatalystClient, CatalystError};
use crate::config::Config;
use crate::extract::extract_interface_update;
use crate::web::signature::verify_webhook_signature;

/// Terminal states of one webhook's handling.
#[derive(Debug)]
pub enum Outcome {
    /// Signature verification failed; the controller was never contacted.
    Rejected,

    /// The body could not be decoded as JSON.
    BadPayload,

    /// The payload carried no usable interface identity; nothing to do.
    NoOp,

    /// The update was attempted; carries the controller's own response.
    Completed { status: u16, body_excerpt: String },
}

/// Run one webhook through verification, extraction, and the controller update.
///
/// Controller-side update failures ride inside [`Outcome::Completed`];
/// an `Err` means the token exchange or the transport itself failed.
pub async fn process_webhook(
    raw_body: &[u8],
    signature: Option<&str>,
    config: &Config,
    catalyst: &CatalystClient,
) -> Result<Outcome, CatalystError> {
    if !verify_webhook_signature(&config.webhook_secret, raw_body, signature) {
        return Ok(Outcome::Rejected);
    }

    let payload: Value = match serde_json::from_slice(raw_body) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, body_length = raw_body.len(), "webhook_body_not_json");
            return Ok(Outcome::BadPayload);
        }
    };

    let update = extract_interface_update(&payload);

    info!(
        interface_uuid = ?update.interface_uuid,
        description = ?update.description,
        "webhook_parsed"
    );

    // Only act with a routable uuid and a present description. An empty
    // description is a valid update (it clears the field); an empty uuid
    // is not a routable target.
    let uuid = update.interface_uuid.as_deref().filter(|u| !u.is_empty());
    let (uuid, description) = match (uuid, update.description.as_deref()) {
        (Some(u), Some(d)) => (u, d),
        _ => {
            log_noop_context(&payload);
            return Ok(Outcome::NoOp);
        }
    };

    let url = build_update_url(config, uuid);

    let token = catalyst.authenticate().await?;
    let outcome = catalyst.update_description(&url, description, &token).await?;

    Ok(Outcome::Completed {
        status: outcome.status,
        body_excerpt: outcome.body_excerpt,
    })
}

/// Log enough payload structure to tune the extraction rules when nothing
/// matched: the top-level key inventory and the `data` object's keys.
fn log_noop_context(payload: &Value) {
    let top_level_keys: Vec<&str> = payload
        .as_object()
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let data_keys: Vec<&str> = payload
        .get("data")
        .and_then(Value::as_object)
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default();

    info!(
        top_level_keys = ?top_level_keys,
        data_keys = ?data_keys,
        "webhook_noop_missing_fields"
    );
}
