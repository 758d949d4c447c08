// WorkEntry aggregate root.
//
// Purpose
// - Own the time interval of one work entry, the soft delete marker and the audit timestamps.
// - Validate each transition, mutate, and record exactly one domain event per accepted change.
//
// Responsibilities
// - finish is the only transition with a business rule: a finished entry cannot be finished again.
// - Every other mutator compares the requested value with the current one and returns silently when
//   they match. No event, no timestamp refresh.
// - update_end_date is a correction tool and may close or re-open the entry, independent of finish.
//
// Boundaries
// - No input or output. Time comes from the injected Clock.
// - Failures leave state and the event buffer untouched: every check runs before the first write.
// - Recorded events stay in the buffer until the orchestration layer drains them.

use crate::modules::work_entries::core::errors::WorkEntryError;
use crate::modules::work_entries::core::events::WorkEntryEvent;
use crate::modules::work_entries::core::events::v1::{
    work_entry_created::WorkEntryCreatedV1, work_entry_deleted::WorkEntryDeletedV1,
    work_entry_end_date_updated::WorkEntryEndDateUpdatedV1,
    work_entry_finished::WorkEntryFinishedV1,
    work_entry_start_date_updated::WorkEntryStartDateUpdatedV1,
    work_entry_started::WorkEntryStartedV1, work_entry_user_id_updated::WorkEntryUserIdUpdatedV1,
};
use crate::modules::work_entries::core::snapshot::WorkEntrySnapshot;
use crate::modules::work_entries::core::time_interval::TimeInterval;
use crate::shared::core::clock::Clock;
use crate::shared::core::date::{format_atom, format_occurred_at, parse_instant, same_second};
use crate::shared::core::event_recorder::EventRecorder;
use crate::shared::core::identifier::Identifier;
use chrono::{DateTime, Utc};

/// Persisted state of a work entry. Carries the version the repository stored it at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkEntryRecord {
    pub id: Identifier,
    pub user_id: Identifier,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub version: i64,
}

#[derive(Debug, Clone)]
pub struct WorkEntry {
    id: Identifier,
    user_id: Identifier,
    time_interval: TimeInterval,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    version: i64,
    events: EventRecorder<WorkEntryEvent>,
}

impl WorkEntry {
    pub fn create_work_entry<C: Clock + ?Sized>(user_id: Identifier, clock: &C) -> Self {
        let mut entry = Self::open(Identifier::random(), user_id, clock);
        entry
            .events
            .record(WorkEntryEvent::WorkEntryCreatedV1(WorkEntryCreatedV1 {
                aggregate_id: entry.id.value(),
                occurred_at: format_occurred_at(entry.created_at),
                user_id: entry.user_id.value(),
                start_at: format_atom(entry.time_interval.start()),
            }));
        entry
    }

    pub fn start<C: Clock + ?Sized>(work_entry_id: Identifier, user_id: Identifier, clock: &C) -> Self {
        let mut entry = Self::open(work_entry_id, user_id, clock);
        entry
            .events
            .record(WorkEntryEvent::WorkEntryStartedV1(WorkEntryStartedV1 {
                aggregate_id: entry.id.value(),
                occurred_at: format_occurred_at(entry.created_at),
                user_id: entry.user_id.value(),
                start_at: format_atom(entry.time_interval.start()),
            }));
        entry
    }

    fn open<C: Clock + ?Sized>(id: Identifier, user_id: Identifier, clock: &C) -> Self {
        let time_interval = TimeInterval::initialize(clock);
        let now = time_interval.start();
        Self {
            id,
            user_id,
            time_interval,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            version: 0,
            events: EventRecorder::new(),
        }
    }

    /// Rebuild an aggregate from persisted state. The event buffer starts empty.
    pub fn rehydrate(record: WorkEntryRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            time_interval: TimeInterval::new(record.start, record.end),
            created_at: record.created_at,
            updated_at: record.updated_at,
            deleted_at: record.deleted_at,
            version: record.version,
            events: EventRecorder::new(),
        }
    }

    pub fn finish<C: Clock + ?Sized>(&mut self, clock: &C) -> Result<(), WorkEntryError> {
        if self.time_interval.is_finished() {
            return Err(WorkEntryError::AlreadyFinished);
        }

        let now = clock.now();
        self.time_interval = self.time_interval.update_end(Some(now));
        self.updated_at = now;
        self.events
            .record(WorkEntryEvent::WorkEntryFinishedV1(WorkEntryFinishedV1 {
                aggregate_id: self.id.value(),
                occurred_at: format_occurred_at(now),
                user_id: self.user_id.value(),
                start_at: format_atom(self.time_interval.start()),
                end_at: format_atom(now),
            }));
        Ok(())
    }

    pub fn update_user_id<C: Clock + ?Sized>(&mut self, user_id: Identifier, clock: &C) {
        if self.user_id == user_id {
            return;
        }

        let now = clock.now();
        self.user_id = user_id;
        self.updated_at = now;
        self.events
            .record(WorkEntryEvent::WorkEntryUserIdUpdatedV1(WorkEntryUserIdUpdatedV1 {
                aggregate_id: self.id.value(),
                occurred_at: format_occurred_at(now),
                user_id: self.user_id.value(),
            }));
    }

    pub fn update_start_date<C: Clock + ?Sized>(
        &mut self,
        start_date: &str,
        clock: &C,
    ) -> Result<(), WorkEntryError> {
        let start = parse_instant(start_date)?;
        if same_second(self.time_interval.start(), start) {
            return Ok(());
        }

        let now = clock.now();
        self.time_interval = self.time_interval.update_start(start);
        self.updated_at = now;
        self.events
            .record(WorkEntryEvent::WorkEntryStartDateUpdatedV1(
                WorkEntryStartDateUpdatedV1 {
                    aggregate_id: self.id.value(),
                    occurred_at: format_occurred_at(now),
                    user_id: self.user_id.value(),
                    start_at: format_atom(start),
                },
            ));
        Ok(())
    }

    /// `None` re-opens the entry.
    pub fn update_end_date<C: Clock + ?Sized>(
        &mut self,
        end_date: Option<&str>,
        clock: &C,
    ) -> Result<(), WorkEntryError> {
        let end = end_date.map(parse_instant).transpose()?;
        let unchanged = match (self.time_interval.end(), end) {
            (None, None) => true,
            (Some(current), Some(requested)) => same_second(current, requested),
            _ => false,
        };
        if unchanged {
            return Ok(());
        }

        let now = clock.now();
        self.time_interval = self.time_interval.update_end(end);
        self.updated_at = now;
        self.events
            .record(WorkEntryEvent::WorkEntryEndDateUpdatedV1(WorkEntryEndDateUpdatedV1 {
                aggregate_id: self.id.value(),
                occurred_at: format_occurred_at(now),
                user_id: self.user_id.value(),
                end_at: end.map(format_atom).unwrap_or_default(),
            }));
        Ok(())
    }

    pub fn delete<C: Clock + ?Sized>(&mut self, clock: &C) {
        if self.deleted_at.is_some() {
            return;
        }

        let now = clock.now();
        self.deleted_at = Some(now);
        self.updated_at = now;
        self.events
            .record(WorkEntryEvent::WorkEntryDeletedV1(WorkEntryDeletedV1 {
                aggregate_id: self.id.value(),
                occurred_at: format_occurred_at(now),
                user_id: self.user_id.value(),
            }));
    }

    pub fn id(&self) -> Identifier {
        self.id
    }

    pub fn user_id(&self) -> Identifier {
        self.user_id
    }

    pub fn time_interval(&self) -> TimeInterval {
        self.time_interval
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.time_interval.is_finished()
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn pending_events(&self) -> &[WorkEntryEvent] {
        self.events.pending()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn pull_domain_events(&mut self) -> Vec<WorkEntryEvent> {
        self.events.drain()
    }

    /// The repository stored the state and the pending events at `version`.
    pub fn mark_persisted(&mut self, version: i64) {
        self.version = version;
        self.events.drain();
    }

    pub fn to_record(&self) -> WorkEntryRecord {
        WorkEntryRecord {
            id: self.id,
            user_id: self.user_id,
            start: self.time_interval.start(),
            end: self.time_interval.end(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
            version: self.version,
        }
    }

    pub fn to_snapshot(&self) -> WorkEntrySnapshot {
        WorkEntrySnapshot::from(self)
    }
}
