// Domain outbox port: the sink that receives recorded domain events after the aggregate was saved.
//
// Responsibilities
// - Describe one published event as an OutboxRow, keyed by aggregate id, aggregate version and sequence.
// - Keep publishing behind a trait so brokers can be swapped without touching the handlers.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboxRow {
    pub topic: String,
    pub event_name: String,
    pub aggregate_id: String,
    /// Stored version of the aggregate after the save that produced the event.
    pub aggregate_version: i64,
    /// Position of the event within the operation that recorded it.
    pub sequence: usize,
    pub occurred_at: String,
    pub payload: BTreeMap<String, String>,
}

impl OutboxRow {
    pub fn key(&self) -> (String, i64, usize) {
        (self.aggregate_id.clone(), self.aggregate_version, self.sequence)
    }
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row for aggregate {aggregate_id} v{aggregate_version} #{sequence}")]
    Duplicate {
        aggregate_id: String,
        aggregate_version: i64,
        sequence: usize,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
