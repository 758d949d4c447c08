#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartWorkEntry {
    pub work_entry_id: String,
    pub user_id: String,
}
