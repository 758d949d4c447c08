/// Full replacement of the editable fields. Dates use the snapshot format; an empty `end_date`
/// means the entry is not finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWorkEntry {
    pub work_entry_id: String,
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl UpdateWorkEntry {
    pub fn end_date(&self) -> Option<&str> {
        if self.end_date.trim().is_empty() {
            None
        } else {
            Some(self.end_date.as_str())
        }
    }
}
