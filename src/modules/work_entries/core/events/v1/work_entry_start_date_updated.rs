#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryStartDateUpdatedV1 {
    pub aggregate_id: String,
    pub occurred_at: String,
    pub user_id: String,
    pub start_at: String,
}
