//! Error types for webhook verification.
//!
//! Every variant is terminal: a failed verification is a security decision,
//! not a transient fault, so nothing here is retryable. Messages never carry
//! the signing secret, the computed digest or the request body.

use thiserror::Error;

/// Why a signed webhook delivery was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The signature header was absent or empty.
    #[error("webhook has no signature header")]
    NotSigned,

    /// The header does not have the `t=<timestamp>,v1=<signature>` shape.
    #[error("webhook has an invalid signature header")]
    InvalidHeader,

    /// The signature field was empty or did not match the payload.
    #[error("webhook had no valid signature")]
    NoValidSignature,

    /// The timestamp is not a base-10 integer.
    #[error("webhook has an invalid timestamp")]
    InvalidTimestamp,

    /// The timestamp is at least `tolerance` old, or lies in the future.
    #[error("webhook has a timestamp that is out of tolerance")]
    OutsideTolerance,
}

/// Problems building a [`VerifierConfig`](crate::VerifierConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("webhook signing secret is missing or empty")]
    MissingSecret,

    #[error("webhook tolerance is not configured")]
    MissingTolerance,

    #[error("webhook tolerance {value:?} is not a whole number of seconds")]
    InvalidTolerance { value: String },
}

/// Umbrella error for calls that both configure and verify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}
