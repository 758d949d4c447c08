// Builders for the work entry commands.
// Defaults point at the identifiers in fixtures::work_entry.

use crate::modules::work_entries::use_cases::start_work_entry::command::StartWorkEntry;
use crate::modules::work_entries::use_cases::update_work_entry::command::UpdateWorkEntry;
use crate::tests::fixtures::work_entry::{USER_ID, WORK_ENTRY_ID};
use serde::Deserialize;
use std::fs;

pub struct StartWorkEntryBuilder {
    inner: StartWorkEntry,
}

impl Default for StartWorkEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartWorkEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: StartWorkEntry {
                work_entry_id: WORK_ENTRY_ID.to_string(),
                user_id: USER_ID.to_string(),
            },
        }
    }

    pub fn work_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.work_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn build(self) -> StartWorkEntry {
        self.inner
    }
}

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkEntryDto {
    pub work_entry_id: String,
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
}

pub struct UpdateWorkEntryBuilder {
    inner: UpdateWorkEntry,
}

impl Default for UpdateWorkEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UpdateWorkEntryBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./tests/fixtures/commands/update_work_entry.json").unwrap();
        let dto: UpdateWorkEntryDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: UpdateWorkEntry {
                work_entry_id: dto.work_entry_id,
                user_id: dto.user_id,
                start_date: dto.start_date,
                end_date: dto.end_date,
            },
        }
    }

    pub fn work_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.work_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.start_date = v.into();
        self
    }

    pub fn end_date(mut self, v: impl Into<String>) -> Self {
        self.inner.end_date = v.into();
        self
    }

    pub fn build(self) -> UpdateWorkEntry {
        self.inner
    }
}

#[cfg(test)]
mod work_entry_command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_update_delegates_to_new_and_parses_json() {
        let built = UpdateWorkEntryBuilder::default().build();
        assert_eq!(built.work_entry_id, WORK_ENTRY_ID);
        assert_eq!(built.user_id, USER_ID);
        assert_eq!(built.start_date, "2024-01-01T08:30:00+00:00");
        assert_eq!(built.end_date, "2024-01-01T17:00:00+00:00");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let start = StartWorkEntryBuilder::default()
            .work_entry_id("wid-123")
            .user_id("uid-456")
            .build();
        assert_eq!(start.work_entry_id, "wid-123");
        assert_eq!(start.user_id, "uid-456");

        let update = UpdateWorkEntryBuilder::new()
            .work_entry_id("wid-123")
            .user_id("uid-456")
            .start_date("2024-02-01 08:00:00")
            .end_date("")
            .build();
        assert_eq!(update.work_entry_id, "wid-123");
        assert_eq!(update.user_id, "uid-456");
        assert_eq!(update.start_date, "2024-02-01 08:00:00");
        assert_eq!(update.end_date, "");
    }
}
