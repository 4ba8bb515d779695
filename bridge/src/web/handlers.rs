//! Webhook endpoint handlers.
//!
//! Handlers stay thin: read the raw body and the signature header, hand both
//! to the processing flow, and translate its outcome into an HTTP response.
//! NetBox must only ever see final statuses; a no-op and a completed attempt
//! both end the conversation.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::catalyst::CatalystClient;
use crate::process::{process_webhook, Outcome};
use crate::Config;

/// Header NetBox carries the HMAC signature in.
const SIGNATURE_HEADER: &str = "X-Hook-Signature";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalyst: CatalystClient,
}

impl AppState {
    pub fn new(config: Config, catalyst: CatalystClient) -> Self {
        Self {
            config: Arc::new(config),
            catalyst,
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Root informational endpoint.
pub async fn root() -> &'static str {
    "NetBox to Catalyst Center bridge is running. Try /healthz"
}

/// NetBox interface-updated webhook endpoint.
///
/// Response contract: 401 on a bad signature, 400 on an undecodable body,
/// 204 when there is nothing to do, the controller's own status forwarded
/// verbatim on a completed attempt, and 500 when the controller could not
/// be reached or authenticated against.
pub async fn netbox_interface_updated(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());

    info!(
        body_length = body.len(),
        has_signature = signature.is_some(),
        "webhook_received"
    );

    match process_webhook(&body, signature, &state.config, &state.catalyst).await {
        Ok(Outcome::Rejected) => (StatusCode::UNAUTHORIZED, "bad signature").into_response(),
        Ok(Outcome::BadPayload) => (StatusCode::BAD_REQUEST, "body is not JSON").into_response(),
        Ok(Outcome::NoOp) => StatusCode::NO_CONTENT.into_response(),
        Ok(Outcome::Completed { status, .. }) => StatusCode::from_u16(status)
            .unwrap_or(StatusCode::BAD_GATEWAY)
            .into_response(),
        Err(e) => {
            error!(error = %e, "webhook_controller_call_failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "controller call failed").into_response()
        }
    }
}
