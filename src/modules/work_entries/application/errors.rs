use crate::modules::work_entries::adapters::outbound::repository::RepositoryError;
use crate::modules::work_entries::core::errors::WorkEntryError;
use crate::shared::infrastructure::domain_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] WorkEntryError),

    #[error("work entry not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),
}
