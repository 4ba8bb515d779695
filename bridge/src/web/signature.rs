//! NetBox webhook signature verification.
//!
//! NetBox signs webhook requests with HMAC-SHA512 over the raw body,
//! sent hex-encoded in the X-Hook-Signature header.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::warn;

type HmacSha512 = Hmac<Sha512>;

/// Verify a NetBox webhook signature against the raw request body.
///
/// An empty `secret` disables verification and accepts every request; that
/// is an explicit opt-out for unsigned NetBox deployments, not a fallback.
/// A missing signature header compares as the empty string and fails
/// whenever a secret is configured.
pub fn verify_webhook_signature(secret: &str, raw_body: &[u8], signature: Option<&str>) -> bool {
    if secret.is_empty() {
        return true;
    }

    let mut mac = match HmacSha512::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("webhook_signature_invalid_key");
            return false;
        }
    };

    mac.update(raw_body);

    let expected = hex::encode(mac.finalize().into_bytes());

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected, signature.unwrap_or(""));

    if !valid {
        warn!(
            has_signature = signature.is_some(),
            body_length = raw_body.len(),
            "webhook_signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
