use thiserror::Error;

use crate::core::types::FieldId;

/// Failures reported by the storage adapter. The library never rewraps
/// the message text, so whatever the adapter reports is what callers see.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Operation(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Field '{0}' is not part of the form definition")]
    UnknownField(FieldId),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store fault: {0}")]
    StoreFault(#[from] StoreError),
}

impl FormsError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FormsError>;
