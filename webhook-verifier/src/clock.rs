//! Injectable time source.
//!
//! Verification never reads the system clock directly; it asks the [`Clock`]
//! stored on its config. Tests pin the clock with [`Clock::fixed`].

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// A shareable zero-argument function returning the current instant.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> SystemTime + Send + Sync>);

impl Clock {
    /// The real wall clock.
    pub fn system() -> Self {
        Self(Arc::new(SystemTime::now))
    }

    /// A clock frozen at `instant`.
    pub fn fixed(instant: SystemTime) -> Self {
        Self(Arc::new(move || instant))
    }

    /// Wrap an arbitrary time source.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> SystemTime + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn now(&self) -> SystemTime {
        (self.0)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Clock(..)")
    }
}
