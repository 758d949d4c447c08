// Time span of a work entry.
//
// Purpose
// - Hold the start instant and the optional end instant. No end means the entry is still running.
//
// Boundaries
// - Updates return a new interval; the aggregate replaces its copy.
// - No ordering rule between start and end. Corrections are accepted as given.

use crate::shared::core::clock::Clock;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl TimeInterval {
    pub fn initialize<C: Clock + ?Sized>(clock: &C) -> Self {
        Self {
            start: clock.now(),
            end: None,
        }
    }

    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    #[must_use]
    pub fn update_start(&self, start: DateTime<Utc>) -> Self {
        Self { start, ..*self }
    }

    #[must_use]
    pub fn update_end(&self, end: Option<DateTime<Utc>>) -> Self {
        Self { end, ..*self }
    }
}
