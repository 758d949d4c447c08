// Identifier value object used for every entity reference.
//
// Invariants
// - Canonical hyphenated UUID form, 36 characters. Braced, urn and simple forms are rejected.
// - Immutable once constructed. Equality is by value.
//
// New identifiers are UUIDv7 so they sort by creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

const CANONICAL_LENGTH: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {value:?}")]
pub struct InvalidIdentifierError {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Uuid);

impl Identifier {
    pub fn random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn parse(value: &str) -> Result<Self, InvalidIdentifierError> {
        let invalid = || InvalidIdentifierError {
            value: value.to_string(),
        };
        if value.len() != CANONICAL_LENGTH {
            return Err(invalid());
        }
        Uuid::parse_str(value).map(Self).map_err(|_| invalid())
    }

    pub fn value(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Identifier {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = InvalidIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.value()
    }
}
