#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteWorkEntry {
    pub work_entry_id: String,
}
