//! Webhook verification.
//!
//! [`Verifier::verify`] runs the whole pipeline against one
//! [`VerifierConfig`]:
//!
//! 1. parse the signature header (no cryptography on malformed input)
//! 2. check the timestamp is fresh against the injected clock
//! 3. recompute and compare the HMAC-SHA256 signature
//!
//! On success the caller gets back the body it passed in, untouched.

use std::time::Duration;

use tracing::debug;

use crate::config::VerifierConfig;
use crate::error::{Error, VerificationError};
use crate::freshness::check_freshness;
use crate::header::SignedHeader;
use crate::signature::check_signature;

/// Verifies signed webhook deliveries.
///
/// Holds no mutable state, so one verifier can serve many threads at once.
#[derive(Debug, Clone)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify `body` against the raw signature header.
    ///
    /// `header` may be a `&str` or an `Option<&str>`; an absent or empty
    /// header fails with [`VerificationError::NotSigned`]. The clock is read
    /// once per call.
    pub fn verify<'h, 'b, B>(
        &self,
        header: impl Into<Option<&'h str>>,
        body: &'b B,
    ) -> Result<&'b B, VerificationError>
    where
        B: AsRef<[u8]> + ?Sized,
    {
        let header = SignedHeader::from_header(header.into())?;

        let now = self.config.clock().now();
        check_freshness(header.timestamp, self.config.tolerance(), now)?;

        let bytes = body.as_ref();
        check_signature(bytes, header.timestamp, header.signature, self.config.secret())?;

        debug!(
            timestamp = header.timestamp,
            body_length = bytes.len(),
            "webhook_payload_verified"
        );

        Ok(body)
    }
}

impl From<VerifierConfig> for Verifier {
    fn from(config: VerifierConfig) -> Self {
        Self::new(config)
    }
}

/// One-shot verification with the system clock.
///
/// Convenient for callers that verify rarely. Anything handling a stream of
/// deliveries should build a [`Verifier`] once and reuse it.
pub fn validate_payload<'h, 'b, B>(
    header: impl Into<Option<&'h str>>,
    body: &'b B,
    secret: impl Into<Vec<u8>>,
    tolerance: Duration,
) -> Result<&'b B, Error>
where
    B: AsRef<[u8]> + ?Sized,
{
    let verifier = Verifier::new(VerifierConfig::new(secret, tolerance)?);
    Ok(verifier.verify(header, body)?)
}
