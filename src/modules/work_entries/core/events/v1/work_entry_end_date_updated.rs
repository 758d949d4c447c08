// The end of a work entry was corrected.
//
// end_at is an empty string when the correction re-opened the entry.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryEndDateUpdatedV1 {
    pub aggregate_id: String,
    pub occurred_at: String,
    pub user_id: String,
    pub end_at: String,
}
