//! Signature header parsing.
//!
//! The sender attaches a header of the form
//!
//! ```text
//! t=<unix_ms_timestamp>,v1=<hex_hmac_sha256>
//! ```
//!
//! Parsing is purely structural. The timestamp is kept as the original text
//! because the signed digest covers it byte-for-byte; interpreting it as a
//! number is the freshness check's job.

use crate::error::VerificationError;

pub const TIMESTAMP_PREFIX: &str = "t=";
pub const SIGNATURE_PREFIX: &str = "v1=";

/// The two fields of a parsed signature header, borrowed from the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedHeader<'a> {
    pub timestamp: &'a str,
    pub signature: &'a str,
}

impl<'a> SignedHeader<'a> {
    /// Parse a raw header value.
    ///
    /// Exactly two comma-separated fields are accepted, `t=` first and `v1=`
    /// second. Whitespace between the comma and `v1=` is tolerated since the
    /// sender emits `t=..., v1=...`.
    pub fn parse(header: &'a str) -> Result<Self, VerificationError> {
        if header.is_empty() {
            return Err(VerificationError::NotSigned);
        }

        let (first, second) = header
            .split_once(',')
            .ok_or(VerificationError::InvalidHeader)?;
        if second.contains(',') {
            return Err(VerificationError::InvalidHeader);
        }

        let timestamp = first
            .strip_prefix(TIMESTAMP_PREFIX)
            .ok_or(VerificationError::InvalidHeader)?;
        let signature = second
            .trim_start()
            .strip_prefix(SIGNATURE_PREFIX)
            .ok_or(VerificationError::InvalidHeader)?;

        if signature.is_empty() {
            return Err(VerificationError::NoValidSignature);
        }

        Ok(Self {
            timestamp,
            signature,
        })
    }

    /// Parse a header that may not have been sent at all.
    pub fn from_header(header: Option<&'a str>) -> Result<Self, VerificationError> {
        Self::parse(header.ok_or(VerificationError::NotSigned)?)
    }
}
