//! Roster error types.
//!
//! Validation failures are raised where they happen and travel through the
//! manager untouched, so callers can classify them without string matching.

use thiserror::Error;

/// Errors that can occur while managing student records.
#[derive(Debug, Error)]
pub enum RosterError {
    /// An argument violated an entity invariant (blank name, negative grade).
    #[error("{0}")]
    InvalidArgument(String),

    /// A repository implementation failed to complete an operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// The output sink rejected a write.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl RosterError {
    /// Returns `true` if this error is an input-validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RosterError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
