// End to end flows through the composition root.
//
// Purpose
// - Drive every command handler against the same in-memory adapters.
// - Check what leaves the bounded context: the outbox rows and the stored snapshots.

use crate::modules::work_entries::adapters::outbound::repository::{
    WorkEntryCriteria, WorkEntryRepository, WorkEntryStatus,
};
use crate::modules::work_entries::application::errors::ApplicationError;
use crate::modules::work_entries::core::errors::WorkEntryError;
use crate::modules::work_entries::use_cases::create_work_entry::command::CreateWorkEntry;
use crate::modules::work_entries::use_cases::delete_work_entry::command::DeleteWorkEntry;
use crate::modules::work_entries::use_cases::finish_work_entry::command::FinishWorkEntry;
use crate::shared::core::clock::ManualClock;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::{StartWorkEntryBuilder, UpdateWorkEntryBuilder};
use crate::tests::fixtures::work_entry::{
    OTHER_USER_ID, USER_ID, WORK_ENTRY_ID, nine_am, user_id, work_entry_id,
};
use chrono::Duration;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(nine_am()))
}

#[fixture]
fn app(clock: Arc<ManualClock>) -> (AppState, Arc<ManualClock>) {
    let config = AppConfig {
        topic: "work-entries.test".to_string(),
        ..AppConfig::default()
    };
    (AppState::in_memory(&config, clock.clone()), clock)
}

#[rstest]
#[tokio::test]
async fn it_should_run_the_full_lifecycle_of_a_work_entry(app: (AppState, Arc<ManualClock>)) {
    let (state, clock) = app;

    state
        .start_handler
        .handle(StartWorkEntryBuilder::new().build())
        .await
        .expect("start failed");

    clock.advance(Duration::hours(8));
    let finished = state
        .finish_handler
        .handle(FinishWorkEntry {
            work_entry_id: WORK_ENTRY_ID.to_string(),
        })
        .await
        .expect("finish failed");
    assert_eq!(finished.end_at, "2024-01-01T17:00:00+00:00");

    clock.advance(Duration::minutes(1));
    let updated = state
        .update_handler
        .handle(
            UpdateWorkEntryBuilder::new()
                .user_id(OTHER_USER_ID)
                .start_date("2024-01-01 08:30:00")
                .end_date("")
                .build(),
        )
        .await
        .expect("update failed");
    assert_eq!(updated.user_id, OTHER_USER_ID);
    assert_eq!(updated.start_at, "2024-01-01T08:30:00+00:00");
    assert_eq!(updated.end_at, "");

    clock.advance(Duration::minutes(1));
    state
        .delete_handler
        .handle(DeleteWorkEntry {
            work_entry_id: WORK_ENTRY_ID.to_string(),
        })
        .await
        .expect("delete failed");

    let rows = state.outbox.rows().await;
    let summary: Vec<(&str, i64, usize)> = rows
        .iter()
        .map(|r| (r.event_name.as_str(), r.aggregate_version, r.sequence))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("WorkEntryStarted", 1, 0),
            ("WorkEntryFinished", 2, 0),
            ("WorkEntryUserIdUpdated", 3, 0),
            ("WorkEntryStartDateUpdated", 3, 1),
            ("WorkEntryEndDateUpdated", 3, 2),
            ("WorkEntryDeleted", 4, 0),
        ]
    );
    assert!(rows.iter().all(|r| r.topic == "work-entries.test"));
    assert!(rows.iter().all(|r| r.aggregate_id == WORK_ENTRY_ID));
    assert_eq!(rows[5].occurred_at, "2024-01-01 17:02:00");
    assert_eq!(
        rows[2].payload.get("userId").map(String::as_str),
        Some(OTHER_USER_ID)
    );

    let stored = state
        .repository
        .by_id(&work_entry_id())
        .await
        .unwrap()
        .expect("entry should still be stored");
    assert!(stored.is_deleted());
    assert_eq!(stored.version(), 4);
    assert_eq!(stored.to_snapshot(), updated);
    assert_eq!(stored.updated_at(), nine_am() + Duration::minutes(8 * 60 + 2));
}

#[rstest]
#[tokio::test]
async fn it_should_keep_entries_of_different_users_apart(app: (AppState, Arc<ManualClock>)) {
    let (state, clock) = app;
    let mine = state
        .create_handler
        .handle(CreateWorkEntry {
            user_id: USER_ID.to_string(),
        })
        .await
        .unwrap();
    clock.advance(Duration::hours(1));
    state
        .create_handler
        .handle(CreateWorkEntry {
            user_id: OTHER_USER_ID.to_string(),
        })
        .await
        .unwrap();
    state
        .finish_handler
        .handle(FinishWorkEntry {
            work_entry_id: mine.id.clone(),
        })
        .await
        .unwrap();

    let finished_for_me = state
        .repository
        .by_criteria(
            &WorkEntryCriteria::new()
                .for_user(user_id())
                .with_status(WorkEntryStatus::Finished),
        )
        .await
        .unwrap();
    assert_eq!(finished_for_me.len(), 1);
    assert_eq!(finished_for_me[0].id().value(), mine.id);

    let running = state
        .repository
        .by_criteria(&WorkEntryCriteria::new().with_status(WorkEntryStatus::Running))
        .await
        .unwrap();
    assert_eq!(running.len(), 1);
    assert_eq!(running[0].user_id().value(), OTHER_USER_ID);
}

#[rstest]
#[tokio::test]
async fn it_should_leave_nothing_behind_for_rejected_commands(app: (AppState, Arc<ManualClock>)) {
    let (state, _) = app;

    let unknown = state
        .finish_handler
        .handle(FinishWorkEntry {
            work_entry_id: WORK_ENTRY_ID.to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(ApplicationError::NotFound { .. })));

    let malformed = state
        .delete_handler
        .handle(DeleteWorkEntry {
            work_entry_id: "42".to_string(),
        })
        .await;
    assert!(matches!(
        malformed,
        Err(ApplicationError::Domain(WorkEntryError::InvalidIdentifier(_)))
    ));

    assert!(state.outbox.rows().await.is_empty());
    let everything = state
        .repository
        .by_criteria(&WorkEntryCriteria::new().including_deleted())
        .await
        .unwrap();
    assert!(everything.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_sweep_events_saved_while_the_outbox_was_down(
    app: (AppState, Arc<ManualClock>),
) {
    let (state, _) = app;
    state.outbox.toggle_offline();

    let created = state
        .create_handler
        .handle(CreateWorkEntry {
            user_id: USER_ID.to_string(),
        })
        .await;
    assert!(matches!(created, Err(ApplicationError::Outbox(_))));
    assert!(state.outbox.rows().await.is_empty());

    state.outbox.toggle_offline();
    let delivered = state.relay.relay_all().await.expect("sweep failed");

    assert_eq!(delivered, 1);
    let rows = state.outbox.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event_name, "WorkEntryCreated");
    assert_eq!(rows[0].aggregate_version, 1);
    assert_eq!(state.relay.relay_all().await.unwrap(), 0);
}
