use crate::shared::core::date::MalformedDateError;
use crate::shared::core::identifier::InvalidIdentifierError;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum WorkEntryError {
    #[error("work entry is already finished")]
    AlreadyFinished,

    #[error(transparent)]
    MalformedDate(#[from] MalformedDateError),

    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),
}
