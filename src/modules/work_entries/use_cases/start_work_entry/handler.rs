use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::context::{CommandContext, parse_identifier};
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::core::snapshot::WorkEntrySnapshot;
use crate::modules::work_entries::core::work_entry::WorkEntry;
use crate::modules::work_entries::use_cases::start_work_entry::command::StartWorkEntry;
use crate::shared::infrastructure::domain_outbox::DomainOutbox;

pub struct StartWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    context: CommandContext<TRepository, TOutbox>,
}

impl<TRepository, TOutbox> StartWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(context: CommandContext<TRepository, TOutbox>) -> Self {
        Self { context }
    }

    /// Start a running entry under a caller-chosen identifier. An identifier that is already
    /// stored is rejected by the repository's version check.
    pub async fn handle(
        &self,
        command: StartWorkEntry,
    ) -> Result<WorkEntrySnapshot, ApplicationError> {
        let work_entry_id = parse_identifier(&command.work_entry_id)?;
        let user_id = parse_identifier(&command.user_id)?;

        let mut entry = WorkEntry::start(work_entry_id, user_id, self.context.clock());
        self.context
            .commit(&mut entry)
            .await
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "start work entry failed"))?;

        tracing::info!(%work_entry_id, %user_id, "work entry started");
        Ok(entry.to_snapshot())
    }
}
