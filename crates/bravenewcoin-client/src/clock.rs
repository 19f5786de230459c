/*
[INPUT]:  Wall clock or a pinned instant
[OUTPUT]: Current UTC instant used when a query omits its start time
[POS]:    Support layer - time source for historical queries
[UPDATE]: When time defaulting rules change
*/

use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Source of "now" for requests that default to the current instant
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
