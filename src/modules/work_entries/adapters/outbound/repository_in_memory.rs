// In memory implementation of the WorkEntryRepository port.
//
// Purpose
// - Support command handler tests and local development without a database.
//
// Responsibilities
// - Store the persisted record of each aggregate keyed by identifier, never the aggregate itself,
//   so every load goes through rehydration.
// - Enforce optimistic concurrency by comparing the stored version with the aggregate's version.
// - Keep the events of each save next to the record, under the same write lock, until they are
//   marked delivered.

use crate::modules::work_entries::adapters::outbound::repository::{
    RepositoryError, UndeliveredEvent, WorkEntryCriteria, WorkEntryRepository,
};
use crate::modules::work_entries::core::work_entry::{WorkEntry, WorkEntryRecord};
use crate::shared::core::identifier::Identifier;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredWorkEntry {
    record: WorkEntryRecord,
    undelivered: Vec<UndeliveredEvent>,
}

#[derive(Default)]
pub struct InMemoryWorkEntryRepository {
    entries: RwLock<HashMap<Identifier, StoredWorkEntry>>,
    delay_save_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryWorkEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delay every save before the version check. Lets tests interleave concurrent handlers.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Work entry repository offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkEntryRepository for InMemoryWorkEntryRepository {
    async fn by_id(&self, id: &Identifier) -> Result<Option<WorkEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        Ok(guard
            .get(id)
            .map(|stored| WorkEntry::rehydrate(stored.record.clone())))
    }

    async fn save(&self, entry: &WorkEntry) -> Result<i64, RepositoryError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.entries.write().await;
        let expected = entry.version();
        let actual = guard.get(&entry.id()).map(|s| s.record.version).unwrap_or(0);
        if actual != expected {
            return Err(RepositoryError::VersionMismatch {
                id: entry.id().value(),
                expected,
                actual,
            });
        }

        let version = expected + 1;
        let mut undelivered = guard
            .remove(&entry.id())
            .map(|s| s.undelivered)
            .unwrap_or_default();
        undelivered.extend(entry.pending_events().iter().cloned().enumerate().map(
            |(sequence, event)| UndeliveredEvent {
                aggregate_version: version,
                sequence,
                event,
            },
        ));
        guard.insert(
            entry.id(),
            StoredWorkEntry {
                record: WorkEntryRecord {
                    version,
                    ..entry.to_record()
                },
                undelivered,
            },
        );
        tracing::debug!(work_entry_id = %entry.id(), version, "work entry saved");
        Ok(version)
    }

    async fn by_criteria(
        &self,
        criteria: &WorkEntryCriteria,
    ) -> Result<Vec<WorkEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;

        let mut items: Vec<WorkEntry> = guard
            .values()
            .map(|stored| WorkEntry::rehydrate(stored.record.clone()))
            .filter(|entry| criteria.matches(entry))
            .collect();

        items.sort_by_key(|entry| (entry.time_interval().start(), entry.id()));
        if criteria.sort_by_start_desc {
            items.reverse();
        }

        let limit = criteria.limit.map_or(usize::MAX, |l| l as usize);
        Ok(items
            .into_iter()
            .skip(criteria.offset as usize)
            .take(limit)
            .collect())
    }

    async fn undelivered(&self, id: &Identifier) -> Result<Vec<UndeliveredEvent>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        Ok(guard
            .get(id)
            .map(|stored| stored.undelivered.clone())
            .unwrap_or_default())
    }

    async fn mark_delivered(
        &self,
        id: &Identifier,
        aggregate_version: i64,
        sequence: usize,
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        if let Some(stored) = guard.get_mut(id) {
            stored
                .undelivered
                .retain(|e| (e.aggregate_version, e.sequence) != (aggregate_version, sequence));
        }
        Ok(())
    }

    async fn with_undelivered(&self) -> Result<Vec<Identifier>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        let mut ids: Vec<Identifier> = guard
            .iter()
            .filter(|(_, stored)| !stored.undelivered.is_empty())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        Ok(ids)
    }
}
