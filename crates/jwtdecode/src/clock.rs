//! Time sources for expiration checks

use std::time::SystemTime;

/// Source of the current time
///
/// [`DecodedToken::expired`](crate::DecodedToken::expired) reads the wall clock;
/// pass any `Clock` to [`DecodedToken::expired_with`](crate::DecodedToken::expired_with)
/// to evaluate a token at another instant.
pub trait Clock {
    /// The current instant
    fn now(&self) -> SystemTime;
}

/// Wall-clock time from [`SystemTime::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(SystemTime);

impl FixedClock {
    pub fn new(now: SystemTime) -> Self {
        Self(now)
    }

    /// A clock reading `seconds` after the Unix epoch
    pub fn from_unix_seconds(seconds: u64) -> Self {
        Self(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(seconds))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
