//! Clock abstraction for the autogenerated notice.
//!
//! Generated files carry a copyright year range ending in the current year.
//! Reading the date through a trait keeps generation reproducible in tests.

use chrono::{DateTime, Datelike, Utc};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar year (UTC).
    fn year(&self) -> i32 {
        self.now().year()
    }
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC on January 1st of `year`, or `None` when `year` is
    /// outside the range chrono can represent.
    pub fn at_year(year: i32) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(0, 0)
            .and_then(|epoch| epoch.with_year(year))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
