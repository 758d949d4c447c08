use crate::modules::work_entries::adapters::outbound::repository::WorkEntryRepository;
use crate::modules::work_entries::application::context::{CommandContext, parse_identifier};
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::core::snapshot::WorkEntrySnapshot;
use crate::modules::work_entries::use_cases::update_work_entry::command::UpdateWorkEntry;
use crate::shared::infrastructure::domain_outbox::DomainOutbox;

pub struct UpdateWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    context: CommandContext<TRepository, TOutbox>,
}

impl<TRepository, TOutbox> UpdateWorkEntryHandler<TRepository, TOutbox>
where
    TRepository: WorkEntryRepository + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(context: CommandContext<TRepository, TOutbox>) -> Self {
        Self { context }
    }

    /// Applies user, start and end in that order. Only the fields that actually change record an
    /// event; an update that changes nothing is neither saved nor published.
    pub async fn handle(
        &self,
        command: UpdateWorkEntry,
    ) -> Result<WorkEntrySnapshot, ApplicationError> {
        let work_entry_id = parse_identifier(&command.work_entry_id)?;
        let user_id = parse_identifier(&command.user_id)?;
        let mut entry = self.context.load(&work_entry_id).await?;

        let clock = self.context.clock();
        entry.update_user_id(user_id, clock);
        entry
            .update_start_date(&command.start_date, clock)
            .and_then(|_| entry.update_end_date(command.end_date(), clock))
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "update rejected"))?;

        let published = self
            .context
            .commit(&mut entry)
            .await
            .inspect_err(|e| tracing::warn!(%work_entry_id, error = %e, "update work entry failed"))?;

        if published == 0 {
            tracing::debug!(%work_entry_id, "work entry unchanged");
        } else {
            tracing::info!(%work_entry_id, changes = published, "work entry updated");
        }
        Ok(entry.to_snapshot())
    }
}
