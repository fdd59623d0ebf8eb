/// Source of the current unix timestamp.
pub trait Clock {
    /// Current unix timestamp in seconds.
    fn unix_timestamp(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_timestamp(&self) -> i64 {
        (**self).unix_timestamp()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        time::OffsetDateTime::now_utc().unix_timestamp()
    }
}

/// A clock frozen at a given timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}
