//! Web server module for handling the inbound NetBox webhook.
//!
//! The HTTP layer is deliberately thin: it reads the raw body and the
//! signature header, delegates to the processing flow, and maps its outcome
//! to a response. All decision logic lives outside this module.

pub mod handlers;
pub mod signature;

pub use handlers::{health, netbox_interface_updated, root, AppState, HealthResponse};
pub use signature::verify_webhook_signature;
