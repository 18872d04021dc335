//! Verifier configuration.
//!
//! A [`VerifierConfig`] is built once and shared by every verification call.
//! It can be assembled in code or read from environment variables.

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretVec};
use tracing::info;

use crate::clock::Clock;
use crate::error::ConfigError;

/// Environment variable holding the shared signing secret.
pub const SECRET_ENV: &str = "WEBHOOK_SIGNING_SECRET";

/// Environment variable holding the tolerance in whole seconds.
pub const TOLERANCE_ENV: &str = "WEBHOOK_TOLERANCE_SECONDS";

/// Shared secret, tolerance and time source for webhook verification.
///
/// The secret is redacted from `Debug` output and zeroized on drop.
#[derive(Clone)]
pub struct VerifierConfig {
    secret: Arc<SecretVec<u8>>,
    tolerance: Duration,
    clock: Clock,
}

impl VerifierConfig {
    /// Create a config using the system clock.
    ///
    /// `tolerance` is the maximum age a signed payload may reach; there is no
    /// default because no value is safe for every sender.
    pub fn new(secret: impl Into<Vec<u8>>, tolerance: Duration) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        Ok(Self {
            secret: Arc::new(SecretVec::new(secret)),
            tolerance,
            clock: Clock::system(),
        })
    }

    /// Replace the time source, typically with [`Clock::fixed`] in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Load configuration from `WEBHOOK_SIGNING_SECRET` and
    /// `WEBHOOK_TOLERANCE_SECONDS`. Both are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_vars(SECRET_ENV, TOLERANCE_ENV)
    }

    fn from_env_vars(secret_var: &str, tolerance_var: &str) -> Result<Self, ConfigError> {
        let secret = env::var(secret_var)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        let tolerance = parse_tolerance(tolerance_var)?;

        info!(
            secret_configured = true,
            tolerance_seconds = tolerance.as_secs(),
            "webhook_config_loaded"
        );

        Self::new(secret, tolerance)
    }

    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.secret.expose_secret()
    }
}

impl fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("secret", &"[REDACTED]")
            .field("tolerance", &self.tolerance)
            .field("clock", &self.clock)
            .finish()
    }
}

/// Parse a whole number of seconds from the named variable.
fn parse_tolerance(name: &str) -> Result<Duration, ConfigError> {
    let raw = env::var(name).map_err(|_| ConfigError::MissingTolerance)?;

    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidTolerance { value: raw })
}
