#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishWorkEntry {
    pub work_entry_id: String,
}
