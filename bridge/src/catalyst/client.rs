//! HTTP client for the Catalyst Center intent API.
//!
//! Every webhook acts on the controller in two sequential calls: a token
//! request, then the interface update. Tokens are scoped to one update and
//! never cached; neither call is retried.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;

/// Timeout for the token request.
const AUTH_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for the interface update; the intent API is slower than auth.
const UPDATE_TIMEOUT: Duration = Duration::from_secs(20);

/// Longest slice of a controller response body that is logged or surfaced.
const BODY_EXCERPT_LEN: usize = 400;

/// Errors talking to Catalyst Center. A non-2xx response to the update call
/// is not among them; that status is handed back in [`UpdateOutcome`].
#[derive(Debug, Error)]
pub enum CatalystError {
    /// The token endpoint answered with a non-success status.
    #[error("token request was rejected with status {status}")]
    TokenRejected { status: u16 },

    /// The token endpoint answered 2xx but without a usable `Token` field.
    #[error("token response did not contain a Token field")]
    TokenMalformed,

    /// Connection, timeout, or TLS failure on either call.
    #[error("transport failure talking to Catalyst Center: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Bearer token for the intent API, scoped to a single update.
#[derive(Debug, Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: String,
}

/// Result of an update call. The controller's own verdict rides here.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub status: u16,
    pub body_excerpt: String,
}

/// Client for the Catalyst Center REST API.
///
/// Built once at startup; holds the connection pool and the credential pair.
/// Safe to clone and share across request handlers.
#[derive(Clone)]
pub struct CatalystClient {
    http: Client,
    host: String,
    username: String,
    password: String,
}

impl CatalystClient {
    /// Build a client honoring the TLS-verification flag from config.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self {
            http,
            host: config.catalyst_host.clone(),
            username: config.catalyst_user.clone(),
            password: config.catalyst_pass.clone(),
        })
    }

    /// Obtain an X-Auth-Token from Catalyst Center.
    ///
    /// Any failure here is fatal for the current webhook; there is no retry.
    pub async fn authenticate(&self) -> Result<AuthToken, CatalystError> {
        let url = format!("{}/dna/system/api/v1/auth/token", self.host);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .timeout(AUTH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status_code = status.as_u16(), "catalyst_token_rejected");
            return Err(CatalystError::TokenRejected {
                status: status.as_u16(),
            });
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            error!(error = %e, "catalyst_token_malformed");
            CatalystError::TokenMalformed
        })?;

        info!("catalyst_token_obtained");

        Ok(AuthToken(body.token))
    }

    /// PUT the new description to the given interface endpoint.
    ///
    /// The controller's status is returned as data, not raised; the caller
    /// decides what a non-2xx means. Only transport failures are errors.
    pub async fn update_description(
        &self,
        url: &str,
        description: &str,
        token: &AuthToken,
    ) -> Result<UpdateOutcome, CatalystError> {
        let response = self
            .http
            .put(url)
            .json(&serde_json::json!({ "description": description }))
            .header("X-Auth-Token", token.as_str())
            .timeout(UPDATE_TIMEOUT)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let body_excerpt = truncate_excerpt(&body, BODY_EXCERPT_LEN);

        info!(
            method = "PUT",
            url = url,
            status_code = status,
            body_excerpt = %body_excerpt,
            "catalyst_update_complete"
        );

        Ok(UpdateOutcome {
            status,
            body_excerpt,
        })
    }
}

/// Truncate a response body on a char boundary for logging.
fn truncate_excerpt(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }

    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
