use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::context::{CommandContext, parse_identifier};
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::core::snapshot::WorkEntrySnapshot;
use crate::modules::work_entries::core::work_entry::WorkEntry;
use crate::modules::work_entries::use_cases::create_work_entry::command::CreateWorkEntry;
use crate::shared::infrastructure::domain_outbox::DomainOutbox;

pub struct CreateWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    context: CommandContext<TRepository, TOutbox>,
}

impl<TRepository, TOutbox> CreateWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(context: CommandContext<TRepository, TOutbox>) -> Self {
        Self { context }
    }

    pub async fn handle(
        &self,
        command: CreateWorkEntry,
    ) -> Result<WorkEntrySnapshot, ApplicationError> {
        let user_id = parse_identifier(&command.user_id)?;

        let mut entry = WorkEntry::create_work_entry(user_id, self.context.clock());
        let work_entry_id = entry.id();
        self.context
            .commit(&mut entry)
            .await
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "create work entry failed"))?;

        tracing::info!(%work_entry_id, %user_id, "work entry created");
        Ok(entry.to_snapshot())
    }
}
