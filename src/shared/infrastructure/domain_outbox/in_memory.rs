// In memory implementation of the DomainOutbox port.
//
// Purpose
// - Support tests and local development by collecting published rows in order for inspection.
//
// Responsibilities
// - Reject a row whose (aggregate id, aggregate version, sequence) was already enqueued.
// - Simulate an unavailable broker with toggle_offline.

use crate::shared::infrastructure::domain_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64, usize)>>,
    is_offline: AtomicBool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `&self` so a shared outbox can go down and come back in the middle of a test.
    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(OutboxError::Backend("Domain outbox offline".into()));
        }
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(row.key()) {
                return Err(OutboxError::Duplicate {
                    aggregate_id: row.aggregate_id,
                    aggregate_version: row.aggregate_version,
                    sequence: row.sequence,
                });
            }
        }
        tracing::debug!(event = %row.event_name, aggregate_id = %row.aggregate_id, "outbox row enqueued");
        self.rows.lock().await.push(row);
        Ok(())
    }
}
