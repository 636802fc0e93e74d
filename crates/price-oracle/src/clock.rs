/// Source of the current time in unix seconds.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Timestamps before the epoch are not a thing on a sane system.
        u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
    }
}

/// A clock frozen at a given unix timestamp. Used for offline evaluation
/// against feed snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}
