use crate::modules::work_entries::adapters::outbound::repository_in_memory::InMemoryWorkEntryRepository;
use crate::modules::work_entries::application::context::CommandContext;
use crate::modules::work_entries::application::relay::OutboxRelay;
use crate::modules::work_entries::use_cases::create_work_entry::handler::CreateWorkEntryHandler;
use crate::modules::work_entries::use_cases::delete_work_entry::handler::DeleteWorkEntryHandler;
use crate::modules::work_entries::use_cases::finish_work_entry::handler::FinishWorkEntryHandler;
use crate::modules::work_entries::use_cases::start_work_entry::handler::StartWorkEntryHandler;
use crate::modules::work_entries::use_cases::update_work_entry::handler::UpdateWorkEntryHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::domain_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::config::AppConfig;
use std::sync::Arc;

type Repository = InMemoryWorkEntryRepository;
type Outbox = InMemoryDomainOutbox;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<Repository>,
    pub outbox: Arc<Outbox>,
    /// Sweeps events a failed enqueue left behind.
    pub relay: Arc<OutboxRelay<Repository, Outbox>>,
    pub start_handler: Arc<StartWorkEntryHandler<Repository, Outbox>>,
    pub create_handler: Arc<CreateWorkEntryHandler<Repository, Outbox>>,
    pub finish_handler: Arc<FinishWorkEntryHandler<Repository, Outbox>>,
    pub update_handler: Arc<UpdateWorkEntryHandler<Repository, Outbox>>,
    pub delete_handler: Arc<DeleteWorkEntryHandler<Repository, Outbox>>,
}

impl AppState {
    pub fn in_memory(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(InMemoryWorkEntryRepository::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let context = CommandContext::new(
            config.topic.clone(),
            repository.clone(),
            outbox.clone(),
            clock,
        );

        Self {
            repository,
            outbox,
            relay: Arc::new(context.relay().clone()),
            start_handler: Arc::new(StartWorkEntryHandler::new(context.clone())),
            create_handler: Arc::new(CreateWorkEntryHandler::new(context.clone())),
            finish_handler: Arc::new(FinishWorkEntryHandler::new(context.clone())),
            update_handler: Arc::new(UpdateWorkEntryHandler::new(context.clone())),
            delete_handler: Arc::new(DeleteWorkEntryHandler::new(context)),
        }
    }
}
