// Parsing and formatting of the instants carried by commands, events and snapshots.
//
// Formats
// - ATOM (RFC 3339 without fractional seconds, numeric offset): start/end values in payloads and snapshots.
// - "YYYY-MM-DD HH:MM:SS": the occurred_at stamp of a domain event.
//
// Inputs are normalised to UTC. Naive inputs are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

const ATOM: &str = "%Y-%m-%dT%H:%M:%S%:z";
const OCCURRED_AT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_ONLY: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed date: {value:?}")]
pub struct MalformedDateError {
    pub value: String,
}

pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, MalformedDateError> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, DATE_ONLY)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| MalformedDateError {
            value: value.to_string(),
        })
}

pub fn format_atom(instant: DateTime<Utc>) -> String {
    instant.format(ATOM).to_string()
}

pub fn format_occurred_at(instant: DateTime<Utc>) -> String {
    instant.format(OCCURRED_AT).to_string()
}

/// Two instants are the same when they fall in the same UTC second.
pub fn same_second(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.timestamp() == b.timestamp()
}
