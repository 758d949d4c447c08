use crate::modules::work_entries::adapters::outbound::repository::UndeliveredEvent;
use crate::shared::infrastructure::domain_outbox::OutboxRow;

/// Translate a stored event into the row the outbox publishes. The key comes from the save that
/// recorded it, so re-publishing the same event yields the same row.
pub fn outbox_row(topic: &str, stored: &UndeliveredEvent) -> OutboxRow {
    let event = &stored.event;
    OutboxRow {
        topic: topic.to_string(),
        event_name: event.name().to_string(),
        aggregate_id: event.aggregate_id().to_string(),
        aggregate_version: stored.aggregate_version,
        sequence: stored.sequence,
        occurred_at: event.occurred_at().to_string(),
        payload: event.payload(),
    }
}

#[cfg(test)]
mod work_entry_event_outbox_tests {
    use super::*;
    use crate::modules::work_entries::core::work_entry::WorkEntry;
    use crate::shared::core::clock::ManualClock;
    use crate::tests::fixtures::work_entry::{WORK_ENTRY_ID, manual_clock, user_id, work_entry_id};
    use rstest::rstest;

    const TOPIC: &str = "work-entries";

    #[rstest]
    fn it_should_map_a_stored_event_to_its_outbox_row(manual_clock: ManualClock) {
        let mut entry = WorkEntry::start(work_entry_id(), user_id(), &manual_clock);
        entry.finish(&manual_clock).unwrap();
        let finished = entry.pull_domain_events().remove(1);

        let row = outbox_row(
            TOPIC,
            &UndeliveredEvent {
                aggregate_version: 3,
                sequence: 1,
                event: finished,
            },
        );

        assert_eq!(row.topic, TOPIC);
        assert_eq!(row.event_name, "WorkEntryFinished");
        assert_eq!(row.aggregate_id, WORK_ENTRY_ID);
        assert_eq!(row.key(), (WORK_ENTRY_ID.to_string(), 3, 1));
        assert_eq!(row.occurred_at, "2024-01-01 09:00:00");
        assert_eq!(
            row.payload.get("endAt").map(String::as_str),
            Some("2024-01-01T09:00:00+00:00")
        );
    }
}
