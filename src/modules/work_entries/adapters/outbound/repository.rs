// Repository port for the work entry aggregate.
//
// Purpose
// - Describe what the handlers need from storage without choosing a storage engine.
//
// Contract
// - by_id returns Ok(None) when nothing is stored under the identifier.
// - save is an upsert of the full state with optimistic concurrency: the stored version must equal
//   entry.version() (0 when nothing is stored), and a successful save advances it by exactly one.
// - save stores the pending events next to the state in the same step. They stay undelivered until
//   mark_delivered, so an outbox failure after the save loses nothing.
// - Loaded aggregates start with an empty event buffer.

use crate::modules::work_entries::core::events::WorkEntryEvent;
use crate::modules::work_entries::core::work_entry::WorkEntry;
use crate::shared::core::identifier::Identifier;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("version mismatch for work entry {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: String,
        expected: i64,
        actual: i64,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// An event saved together with the state change that recorded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndeliveredEvent {
    /// Stored version written by the save that recorded the event.
    pub aggregate_version: i64,
    pub sequence: usize,
    pub event: WorkEntryEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkEntryStatus {
    Running,
    Finished,
}

/// Filter, order and page applied by by_criteria. Deleted entries are excluded unless asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkEntryCriteria {
    pub user_id: Option<Identifier>,
    pub status: Option<WorkEntryStatus>,
    pub include_deleted: bool,
    pub sort_by_start_desc: bool,
    pub offset: u64,
    pub limit: Option<u64>,
}

impl WorkEntryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_user(mut self, user_id: Identifier) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: WorkEntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.sort_by_start_desc = true;
        self
    }

    pub fn page(mut self, offset: u64, limit: u64) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, entry: &WorkEntry) -> bool {
        if self.user_id.is_some_and(|user_id| user_id != entry.user_id()) {
            return false;
        }
        if !self.include_deleted && entry.is_deleted() {
            return false;
        }
        match self.status {
            Some(WorkEntryStatus::Running) => !entry.is_finished(),
            Some(WorkEntryStatus::Finished) => entry.is_finished(),
            None => true,
        }
    }
}

#[async_trait]
pub trait WorkEntryRepository: Send + Sync {
    async fn by_id(&self, id: &Identifier) -> Result<Option<WorkEntry>, RepositoryError>;
    /// Returns the new stored version.
    async fn save(&self, entry: &WorkEntry) -> Result<i64, RepositoryError>;
    async fn by_criteria(
        &self,
        criteria: &WorkEntryCriteria,
    ) -> Result<Vec<WorkEntry>, RepositoryError>;
    async fn undelivered(&self, id: &Identifier) -> Result<Vec<UndeliveredEvent>, RepositoryError>;
    async fn mark_delivered(
        &self,
        id: &Identifier,
        aggregate_version: i64,
        sequence: usize,
    ) -> Result<(), RepositoryError>;
    async fn with_undelivered(&self) -> Result<Vec<Identifier>, RepositoryError>;
}
