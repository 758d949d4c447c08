use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::context::{CommandContext, parse_identifier};
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::core::snapshot::WorkEntrySnapshot;
use crate::modules::work_entries::use_cases::finish_work_entry::command::FinishWorkEntry;
use crate::shared::infrastructure::domain_outbox::DomainOutbox;

pub struct FinishWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    context: CommandContext<TRepository, TOutbox>,
}

impl<TRepository, TOutbox> FinishWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(context: CommandContext<TRepository, TOutbox>) -> Self {
        Self { context }
    }

    pub async fn handle(
        &self,
        command: FinishWorkEntry,
    ) -> Result<WorkEntrySnapshot, ApplicationError> {
        let work_entry_id = parse_identifier(&command.work_entry_id)?;
        let mut entry = self.context.load(&work_entry_id).await?;

        entry
            .finish(self.context.clock())
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "finish rejected"))?;
        self.context
            .commit(&mut entry)
            .await
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "finish work entry failed"))?;

        tracing::info!(%work_entry_id, "work entry finished");
        Ok(entry.to_snapshot())
    }
}
