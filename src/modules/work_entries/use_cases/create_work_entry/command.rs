/// Starts a work entry under a freshly generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkEntry {
    pub user_id: String,
}
