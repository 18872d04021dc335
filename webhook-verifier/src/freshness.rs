//! Timestamp freshness check.
//!
//! Signed timestamps are milliseconds since the Unix epoch, truncated to
//! whole seconds before comparison. A payload is fresh only while
//! `0 <= now - signed_at < tolerance`; stale and future-dated payloads are
//! both rejected as out of tolerance.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::VerificationError;

/// Check that `timestamp` was signed less than `tolerance` before `now`.
pub fn check_freshness(
    timestamp: &str,
    tolerance: Duration,
    now: SystemTime,
) -> Result<(), VerificationError> {
    let millis: i64 = timestamp
        .parse()
        .map_err(|_| VerificationError::InvalidTimestamp)?;

    // Instants the platform cannot represent are never within tolerance.
    let signed_at = signed_instant(millis / 1000).ok_or(VerificationError::OutsideTolerance)?;

    match now.duration_since(signed_at) {
        Ok(age) if age < tolerance => Ok(()),
        _ => Err(VerificationError::OutsideTolerance),
    }
}

fn signed_instant(secs: i64) -> Option<SystemTime> {
    let offset = Duration::from_secs(secs.unsigned_abs());
    if secs >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    }
}
