//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at startup and is immutable afterwards.
//! Missing required variables refuse startup instead of failing on the
//! first webhook.

use std::env;

use thiserror::Error;
use url::Url;

/// Errors that prevent the process from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// The configured Catalyst Center host is not a valid URL.
    #[error("{name} is not a valid URL ({value}): {source}")]
    InvalidHost {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },
}

/// Which Catalyst Center API family owns the interface update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfacePathMode {
    /// `/dna/intent/api/v1/interface/{id}` (wired and default)
    Generic,
    /// `/dna/intent/api/v1/wirelessSettings/interfaces/{id}`
    Wireless,
}

impl InterfacePathMode {
    /// Only the exact value `wireless` selects the wireless family;
    /// anything else falls back to generic.
    fn parse(raw: &str) -> Self {
        if raw == "wireless" {
            InterfacePathMode::Wireless
        } else {
            InterfacePathMode::Generic
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalyst Center base URL, without a trailing slash
    pub catalyst_host: String,

    /// Catalyst Center API username
    pub catalyst_user: String,

    /// Catalyst Center API password
    pub catalyst_pass: String,

    /// NetBox webhook shared secret; empty disables signature verification
    pub webhook_secret: String,

    /// Whether to verify the controller's TLS certificate
    pub verify_tls: bool,

    /// Deployment mode query parameter ("Deploy" or "Preview"); empty omits it
    pub deployment_mode: String,

    /// Which update endpoint family to target
    pub interface_path: InterfacePathMode,

    /// Port for the web server to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CC_HOST`, `CC_USER`, and `CC_PASS` are required; everything else has
    /// a default. The host URL is validated here so the URL builder can stay
    /// a pure template.
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalyst_host = require("CC_HOST")?.trim_end_matches('/').to_string();

        Url::parse(&catalyst_host).map_err(|source| ConfigError::InvalidHost {
            name: "CC_HOST",
            value: catalyst_host.clone(),
            source,
        })?;

        Ok(Config {
            catalyst_host,

            catalyst_user: require("CC_USER")?,

            catalyst_pass: require("CC_PASS")?,

            webhook_secret: env::var("NB_SECRET").unwrap_or_default(),

            verify_tls: parse_bool("VERIFY_TLS", true),

            deployment_mode: env::var("DEPLOYMENT_MODE")
                .unwrap_or_else(|_| "Deploy".to_string()),

            interface_path: InterfacePathMode::parse(
                &env::var("INTERFACE_PATH").unwrap_or_default(),
            ),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5100),
        })
    }
}

/// Read a required environment variable, treating empty as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Parse a boolean environment variable; only `true` (case-insensitive)
/// counts as true, anything else is false.
fn parse_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => v.trim().eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}
