//! Time source for `created_at` stamps

use chrono::{DateTime, Utc};

/// Supplies the current time to the fusion engine.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Makes fusion fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at `at`.
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Clock frozen at the Unix epoch.
    #[must_use]
    pub const fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::epoch();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), 0);
    }

    #[test]
    fn test_system_clock_advances() {
        let before = SystemClock.now();
        let after = SystemClock.now();
        assert!(after >= before);
    }
}
