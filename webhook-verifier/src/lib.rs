//! Webhook signature verification.
//!
//! Authenticates inbound webhook deliveries signed with a shared secret.
//! Each delivery carries a header of the form
//!
//! ```text
//! t=<unix_ms_timestamp>,v1=<hex_hmac_sha256>
//! ```
//!
//! where the signature is HMAC-SHA256 over `"<timestamp>.<raw body>"`.
//!
//! ## Pipeline
//!
//! ```text
//! header → SignedHeader::parse → check_freshness → check_signature → body
//! ```
//!
//! ```
//! use std::time::{Duration, UNIX_EPOCH};
//! use webhooks::{sign_payload, Clock, Verifier, VerifierConfig};
//!
//! let body = r#"{"x":1}"#;
//! let header = sign_payload(b"whsec_test", 1_614_556_800_000, body.as_bytes()).unwrap();
//!
//! let config = VerifierConfig::new("whsec_test", Duration::from_secs(300))
//!     .unwrap()
//!     .with_clock(Clock::fixed(UNIX_EPOCH + Duration::from_secs(1_614_556_801)));
//! let verifier = Verifier::new(config);
//!
//! assert_eq!(verifier.verify(header.as_str(), body), Ok(body));
//! ```
//!
//! Network I/O, body parsing and secret storage are the caller's concern.

pub mod clock;
pub mod config;
pub mod error;
pub mod freshness;
pub mod header;
pub mod signature;
pub mod verifier;

// Re-export commonly used types
pub use clock::Clock;
pub use config::VerifierConfig;
pub use error::{ConfigError, Error, VerificationError};
pub use freshness::check_freshness;
pub use header::SignedHeader;
pub use signature::{check_signature, compute_digest, sign_payload};
pub use verifier::{validate_payload, Verifier};
