//! Injected clock.
//!
//! Every listing computation reads the clock exactly once and threads that
//! instant through status resolution and ranking, so all comparisons within
//! one response agree even if wall-clock time advances mid-request.

use chrono::{DateTime, Utc};

/// Supplies the single "now" instant for one engine invocation.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The default in production call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A pinned instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
