// Relay from the events stored by the repository to the domain outbox.
//
// Responsibilities
// - Enqueue the undelivered events of an aggregate in recorded order.
// - Mark an event delivered only after the outbox accepted it. A Duplicate means an earlier relay
//   got the row out but never marked it, so it is marked now.
// - Stop at the first failure. What is left stays undelivered for the next relay.

use crate::modules::work_entries::adapters::outbound::event_outbox::outbox_row;
use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::shared::core::identifier::Identifier;
use crate::shared::infrastructure::domain_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;

pub struct OutboxRelay<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    topic: String,
    repository: Arc<TRepository>,
    outbox: Arc<TOutbox>,
}

impl<TRepository, TOutbox> Clone for OutboxRelay<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    fn clone(&self) -> Self {
        Self {
            topic: self.topic.clone(),
            repository: self.repository.clone(),
            outbox: self.outbox.clone(),
        }
    }
}

impl<TRepository, TOutbox> OutboxRelay<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(topic: impl Into<String>, repository: Arc<TRepository>, outbox: Arc<TOutbox>) -> Self {
        Self {
            topic: topic.into(),
            repository,
            outbox,
        }
    }

    /// Returns the number of events handed to the outbox.
    pub async fn relay(&self, id: &Identifier) -> Result<usize, ApplicationError> {
        let mut delivered = 0;
        for stored in self.repository.undelivered(id).await? {
            match self.outbox.enqueue(outbox_row(&self.topic, &stored)).await {
                Ok(()) => {}
                Err(OutboxError::Duplicate { .. }) => {
                    tracing::debug!(work_entry_id = %id, version = stored.aggregate_version, sequence = stored.sequence, "event already enqueued");
                }
                Err(e) => {
                    tracing::warn!(work_entry_id = %id, error = %e, "relay stopped, events kept for retry");
                    return Err(e.into());
                }
            }
            self.repository
                .mark_delivered(id, stored.aggregate_version, stored.sequence)
                .await?;
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Relay every aggregate that still holds undelivered events.
    pub async fn relay_all(&self) -> Result<usize, ApplicationError> {
        let mut delivered = 0;
        for id in self.repository.with_undelivered().await? {
            delivered += self.relay(&id).await?;
        }
        Ok(delivered)
    }
}
