//! Wall clock that never runs backwards within the process

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Hands out UTC timestamps that are non-decreasing across all callers.
///
/// If the system clock steps back, the last issued timestamp is repeated
/// until wall time catches up. Timestamps are not unique.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last_micros: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }

    fn observe(&self, wall: DateTime<Utc>) -> DateTime<Utc> {
        let candidate = wall.timestamp_micros();
        let prev = self.last_micros.fetch_max(candidate, Ordering::SeqCst);
        let issued = prev.max(candidate);
        DateTime::from_timestamp_micros(issued).unwrap_or(wall)
    }
}
