// Shared plumbing for the work entry command handlers.
//
// Responsibilities
// - Parse raw identifiers from commands before anything is loaded or mutated.
// - Load an aggregate or report NotFound. Events an earlier command left undelivered are relayed
//   first, so retrying a command gets them out even when the retry itself changes nothing.
// - Commit: save state and events in one step, adopt the stored version, then relay the events in
//   recorded order. Nothing recorded means nothing to save and nothing to publish.
//
// Boundaries
// - A failed save publishes nothing. A failed enqueue happens after the state and its events were
//   saved, is reported as ApplicationError::Outbox, and loses nothing.

use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::application::relay::OutboxRelay;
use crate::modules::work_entries::core::errors::WorkEntryError;
use crate::modules::work_entries::core::work_entry::WorkEntry;
use crate::shared::core::clock::Clock;
use crate::shared::core::identifier::Identifier;
use crate::shared::infrastructure::domain_outbox::DomainOutbox;
use std::sync::Arc;

pub struct CommandContext<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    repository: Arc<TRepository>,
    relay: OutboxRelay<TRepository, TOutbox>,
    clock: Arc<dyn Clock>,
}

impl<TRepository, TOutbox> Clone for CommandContext<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            relay: self.relay.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<TRepository, TOutbox> CommandContext<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        repository: Arc<TRepository>,
        outbox: Arc<TOutbox>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            relay: OutboxRelay::new(topic, repository.clone(), outbox),
            repository,
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn relay(&self) -> &OutboxRelay<TRepository, TOutbox> {
        &self.relay
    }

    pub async fn load(&self, id: &Identifier) -> Result<WorkEntry, ApplicationError> {
        let entry = self
            .repository
            .by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound { id: id.value() })?;

        // leftovers stay stored when the outbox is still down
        if let Err(e) = self.relay.relay(id).await {
            tracing::warn!(work_entry_id = %id, error = %e, "undelivered events kept");
        }
        Ok(entry)
    }

    /// Returns the number of events handed to the outbox.
    pub async fn commit(&self, entry: &mut WorkEntry) -> Result<usize, ApplicationError> {
        if !entry.has_pending_events() {
            tracing::debug!(work_entry_id = %entry.id(), "no change recorded, nothing to commit");
            return Ok(0);
        }

        let version = self.repository.save(entry).await?;
        entry.mark_persisted(version);
        self.relay.relay(&entry.id()).await
    }
}

pub fn parse_identifier(raw: &str) -> Result<Identifier, ApplicationError> {
    Identifier::parse(raw).map_err(|e| ApplicationError::Domain(WorkEntryError::from(e)))
}
