//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod book;
pub mod catalog;
pub mod error;
pub mod graph;

pub use book::{parse_themes, Book};
pub use catalog::{BookNode, Catalog, InOrderIter};
pub use error::{DomainError, DomainResult};
pub use graph::AuthorGraph;
