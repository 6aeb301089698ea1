//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("book not found: {0}")]
    BookNotFound(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
