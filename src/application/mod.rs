//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic; it holds the session-wide state
//! and stays free of terminal and config concerns.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::library::Library;
pub use services::recommend::{recommend_by_author, recommend_by_theme};
pub use services::users::{User, UserDirectory};
