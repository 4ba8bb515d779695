//! NetBox → Catalyst Center description bridge.
//!
//! NetBox pushes a webhook when a network interface changes; the bridge
//! verifies the message, pulls the interface's Catalyst Center UUID and new
//! description out of the payload, and PUTs the description to the matching
//! controller interface.
//!
//! ## Flow
//!
//! ```text
//! NetBox webhook → signature check → payload extraction → token → PUT description
//! ```

pub mod catalyst;
pub mod config;
pub mod extract;
pub mod process;
pub mod web;

// Re-export commonly used types
pub use catalyst::{CatalystClient, CatalystError};
pub use config::{Config, ConfigError, InterfacePathMode};
pub use extract::{extract_interface_update, InterfaceUpdate};
pub use process::{process_webhook, Outcome};
pub use web::AppState;
