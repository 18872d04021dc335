//! Webhook signature computation and verification.
//!
//! The sender signs `"<timestamp>.<raw body>"` with HMAC-SHA256 keyed by the
//! shared secret and renders the tag as lowercase hex. The timestamp is the
//! exact text from the header and the body is never re-serialized.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{ConfigError, VerificationError};
use crate::header::{SIGNATURE_PREFIX, TIMESTAMP_PREFIX};

type HmacSha256 = Hmac<Sha256>;

/// Compute the lowercase hex HMAC-SHA256 digest of `"<timestamp>.<body>"`.
pub fn compute_digest(secret: &[u8], timestamp: &str, body: &[u8]) -> Result<String, ConfigError> {
    if secret.is_empty() {
        return Err(ConfigError::MissingSecret);
    }

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| ConfigError::MissingSecret)?;
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check `signature` against the digest recomputed from the payload.
///
/// The comparison is exact: case-sensitive, full-length and constant-time.
pub fn check_signature(
    body: &[u8],
    timestamp: &str,
    signature: &str,
    secret: &[u8],
) -> Result<(), VerificationError> {
    let expected = compute_digest(secret, timestamp, body)
        .map_err(|_| VerificationError::NoValidSignature)?;

    if constant_time_compare(expected.as_bytes(), signature.as_bytes()) {
        Ok(())
    } else {
        Err(VerificationError::NoValidSignature)
    }
}

/// Produce a complete `t=<timestamp>,v1=<digest>` header for `body`.
///
/// This is the sender's half of the protocol; receivers only need
/// [`Verifier`](crate::Verifier).
pub fn sign_payload(secret: &[u8], timestamp_ms: i64, body: &[u8]) -> Result<String, ConfigError> {
    let timestamp = timestamp_ms.to_string();
    let digest = compute_digest(secret, &timestamp, body)?;
    Ok(format!(
        "{TIMESTAMP_PREFIX}{timestamp},{SIGNATURE_PREFIX}{digest}"
    ))
}

/// Constant-time byte comparison. Length is not secret and is checked first.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
