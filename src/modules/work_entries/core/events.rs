// Root event enumeration for the work entry aggregate and re-exports of versioned payloads.
//
// Purpose
// - Provide a single type for the aggregate's event buffer, the outbox adapter and consumers.
// - Render any event as a DomainEventRecord: name, aggregate id, occurred at and a string payload.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Event names stay stable across versions.

use std::collections::BTreeMap;

pub mod v1 {
    pub mod work_entry_created;
    pub mod work_entry_deleted;
    pub mod work_entry_end_date_updated;
    pub mod work_entry_finished;
    pub mod work_entry_start_date_updated;
    pub mod work_entry_started;
    pub mod work_entry_user_id_updated;
}

use v1::{
    work_entry_created::WorkEntryCreatedV1, work_entry_deleted::WorkEntryDeletedV1,
    work_entry_end_date_updated::WorkEntryEndDateUpdatedV1,
    work_entry_finished::WorkEntryFinishedV1,
    work_entry_start_date_updated::WorkEntryStartDateUpdatedV1,
    work_entry_started::WorkEntryStartedV1, work_entry_user_id_updated::WorkEntryUserIdUpdatedV1,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum WorkEntryEvent {
    WorkEntryCreatedV1(WorkEntryCreatedV1),
    WorkEntryStartedV1(WorkEntryStartedV1),
    WorkEntryFinishedV1(WorkEntryFinishedV1),
    WorkEntryUserIdUpdatedV1(WorkEntryUserIdUpdatedV1),
    WorkEntryStartDateUpdatedV1(WorkEntryStartDateUpdatedV1),
    WorkEntryEndDateUpdatedV1(WorkEntryEndDateUpdatedV1),
    WorkEntryDeletedV1(WorkEntryDeletedV1),
}

/// Transport neutral shape of a recorded event.
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DomainEventRecord {
    pub name: String,
    pub aggregate_id: String,
    pub occurred_at: String,
    pub payload: BTreeMap<String, String>,
}

impl WorkEntryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WorkEntryCreatedV1(_) => "WorkEntryCreated",
            Self::WorkEntryStartedV1(_) => "WorkEntryStarted",
            Self::WorkEntryFinishedV1(_) => "WorkEntryFinished",
            Self::WorkEntryUserIdUpdatedV1(_) => "WorkEntryUserIdUpdated",
            Self::WorkEntryStartDateUpdatedV1(_) => "WorkEntryStartDateUpdated",
            Self::WorkEntryEndDateUpdatedV1(_) => "WorkEntryEndDateUpdated",
            Self::WorkEntryDeletedV1(_) => "WorkEntryDeleted",
        }
    }

    pub fn aggregate_id(&self) -> &str {
        match self {
            Self::WorkEntryCreatedV1(e) => &e.aggregate_id,
            Self::WorkEntryStartedV1(e) => &e.aggregate_id,
            Self::WorkEntryFinishedV1(e) => &e.aggregate_id,
            Self::WorkEntryUserIdUpdatedV1(e) => &e.aggregate_id,
            Self::WorkEntryStartDateUpdatedV1(e) => &e.aggregate_id,
            Self::WorkEntryEndDateUpdatedV1(e) => &e.aggregate_id,
            Self::WorkEntryDeletedV1(e) => &e.aggregate_id,
        }
    }

    pub fn occurred_at(&self) -> &str {
        match self {
            Self::WorkEntryCreatedV1(e) => &e.occurred_at,
            Self::WorkEntryStartedV1(e) => &e.occurred_at,
            Self::WorkEntryFinishedV1(e) => &e.occurred_at,
            Self::WorkEntryUserIdUpdatedV1(e) => &e.occurred_at,
            Self::WorkEntryStartDateUpdatedV1(e) => &e.occurred_at,
            Self::WorkEntryEndDateUpdatedV1(e) => &e.occurred_at,
            Self::WorkEntryDeletedV1(e) => &e.occurred_at,
        }
    }

    pub fn payload(&self) -> BTreeMap<String, String> {
        let fields: Vec<(&str, &str)> = match self {
            Self::WorkEntryCreatedV1(e) => {
                vec![("userId", e.user_id.as_str()), ("startAt", e.start_at.as_str())]
            }
            Self::WorkEntryStartedV1(e) => {
                vec![("userId", e.user_id.as_str()), ("startAt", e.start_at.as_str())]
            }
            Self::WorkEntryFinishedV1(e) => vec![
                ("userId", e.user_id.as_str()),
                ("startAt", e.start_at.as_str()),
                ("endAt", e.end_at.as_str()),
            ],
            Self::WorkEntryUserIdUpdatedV1(e) => vec![("userId", e.user_id.as_str())],
            Self::WorkEntryStartDateUpdatedV1(e) => {
                vec![("userId", e.user_id.as_str()), ("startAt", e.start_at.as_str())]
            }
            Self::WorkEntryEndDateUpdatedV1(e) => {
                vec![("userId", e.user_id.as_str()), ("endAt", e.end_at.as_str())]
            }
            Self::WorkEntryDeletedV1(e) => vec![("userId", e.user_id.as_str())],
        };
        std::iter::once(("aggregateId", self.aggregate_id()))
            .chain(fields)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    pub fn to_record(&self) -> DomainEventRecord {
        DomainEventRecord {
            name: self.name().to_string(),
            aggregate_id: self.aggregate_id().to_string(),
            occurred_at: self.occurred_at().to_string(),
            payload: self.payload(),
        }
    }
}
