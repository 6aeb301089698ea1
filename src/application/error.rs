//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add account-level failures.
///
/// All of these are expected, recoverable conditions. Unknown username and
/// wrong password are deliberately indistinguishable to the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
