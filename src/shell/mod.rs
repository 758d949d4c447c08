// Composition root for the work_entries bounded context.
//
// Responsibilities
// - Read config from environment.
// - Initialise tracing.
// - Instantiate concrete infrastructure implementations and wire them into the command handlers.
// - Expose the outbox relay so a runner can sweep events that were saved but never enqueued.

pub mod config;
pub mod state;
pub mod telemetry;

use crate::shared::core::clock::SystemClock;
use config::AppConfig;
use state::AppState;
use std::sync::Arc;

pub fn bootstrap() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;
    telemetry::init(&config.log_filter)?;
    tracing::info!(topic = %config.topic, "work entries wired with in-memory adapters");
    Ok(AppState::in_memory(&config, Arc::new(SystemClock)))
}
