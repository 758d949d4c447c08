// Shared test fixtures for the work entry aggregate.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::work_entries::core::work_entry::WorkEntry;
use crate::shared::core::clock::ManualClock;
use crate::shared::core::identifier::Identifier;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::fixture;

pub const WORK_ENTRY_ID: &str = "0190f5c3-6f8e-7a2b-9c3d-1e2f3a4b5c6d";
pub const USER_ID: &str = "0190f5c3-0000-7000-8000-000000000001";
pub const OTHER_USER_ID: &str = "0190f5c3-0000-7000-8000-000000000002";

pub fn nine_am() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

#[fixture]
pub fn manual_clock() -> ManualClock {
    ManualClock::new(nine_am())
}

pub fn work_entry_id() -> Identifier {
    Identifier::parse(WORK_ENTRY_ID).unwrap()
}

pub fn user_id() -> Identifier {
    Identifier::parse(USER_ID).unwrap()
}

pub fn other_user_id() -> Identifier {
    Identifier::parse(OTHER_USER_ID).unwrap()
}

/// Running entry started at the clock's current time, event buffer already drained.
pub fn started_work_entry(clock: &ManualClock) -> WorkEntry {
    let mut entry = WorkEntry::start(work_entry_id(), user_id(), clock);
    entry.pull_domain_events();
    entry
}

/// Entry finished one hour after it started, event buffer already drained. Advances the clock.
pub fn finished_work_entry(clock: &ManualClock) -> WorkEntry {
    let mut entry = started_work_entry(clock);
    clock.advance(Duration::hours(1));
    entry.finish(clock).unwrap();
    entry.pull_domain_events();
    entry
}
