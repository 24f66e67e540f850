use thiserror::Error;

use crate::domain::candidate::Candidate;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A list or history load failed. Callers show an empty result.
    #[error("Query failed: {0}")]
    QueryFailure(String),

    /// An insert or update failed. The draft is kept and nothing was logged.
    #[error("Write failed: {0}")]
    WriteFailure(String),

    /// The store acknowledged an insert without returning the created row.
    #[error("Record stored without a returned identity")]
    MissingIdentity,

    /// The record write committed but the audit append did not.
    #[error("Candidate {} saved but audit entry failed: {reason}", candidate.id)]
    AuditWriteFailure {
        candidate: Box<Candidate>,
        reason: String,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ApiError {
    /// True when the candidate record itself reached the store, so the
    /// dialog must not offer to submit it again.
    pub fn record_committed(&self) -> bool {
        matches!(
            self,
            ApiError::AuditWriteFailure { .. } | ApiError::MissingIdentity
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
