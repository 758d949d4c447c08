// Serialized representation of a work entry for external consumers.
//
// Shape: { id, userId, startAt, endAt }. endAt is an empty string, never null or missing,
// while the entry is running. Consumers depend on that sentinel.

use crate::modules::work_entries::core::work_entry::WorkEntry;
use crate::shared::core::date::format_atom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntrySnapshot {
    pub id: String,
    pub user_id: String,
    pub start_at: String,
    pub end_at: String,
}

impl From<&WorkEntry> for WorkEntrySnapshot {
    fn from(entry: &WorkEntry) -> Self {
        let interval = entry.time_interval();
        Self {
            id: entry.id().value(),
            user_id: entry.user_id().value(),
            start_at: format_atom(interval.start()),
            end_at: interval.end().map(format_atom).unwrap_or_default(),
        }
    }
}
