/// Core error types for roster
use crate::types::UserId;
use crate::validation::ValidationError;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Input outside its declared range or length
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record matches the given id
    #[error("User was not found")]
    NotFound(UserId),
}

impl RosterError {
    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
