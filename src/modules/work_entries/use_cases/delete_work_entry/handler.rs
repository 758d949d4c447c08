use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::context::{CommandContext, parse_identifier};
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::core::snapshot::WorkEntrySnapshot;
use crate::modules::work_entries::use_cases::delete_work_entry::command::DeleteWorkEntry;
use crate::shared::infrastructure::domain_outbox::DomainOutbox;

pub struct DeleteWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    context: CommandContext<TRepository, TOutbox>,
}

impl<TRepository, TOutbox> DeleteWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(context: CommandContext<TRepository, TOutbox>) -> Self {
        Self { context }
    }

    /// Soft delete. Deleting an entry twice keeps the first deletion timestamp.
    pub async fn handle(
        &self,
        command: DeleteWorkEntry,
    ) -> Result<WorkEntrySnapshot, ApplicationError> {
        let work_entry_id = parse_identifier(&command.work_entry_id)?;
        let mut entry = self.context.load(&work_entry_id).await?;

        entry.delete(self.context.clock());
        let published = self
            .context
            .commit(&mut entry)
            .await
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "delete work entry failed"))?;

        if published == 0 {
            tracing::debug!(%work_entry_id, "work entry already deleted");
        } else {
            tracing::info!(%work_entry_id, "work entry deleted");
        }
        Ok(entry.to_snapshot())
    }
}
