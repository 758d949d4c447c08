// A work entry was started under an identifier chosen by the caller.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryStartedV1 {
    pub aggregate_id: String,
    pub occurred_at: String,
    pub user_id: String,
    pub start_at: String,
}
