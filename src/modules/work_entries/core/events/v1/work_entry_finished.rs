// Event payload: WorkEntryFinishedV1.
//
// Purpose
// - Record that a running work entry was closed through finish, with both ends of the interval.
//
// Versioning and evolution
// - Prefer adding fields. For breaking changes, create WorkEntryFinishedV2 in a new file and add a new variant.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryFinishedV1 {
    pub aggregate_id: String,
    pub occurred_at: String,
    pub user_id: String,
    pub start_at: String,
    pub end_at: String,
}
