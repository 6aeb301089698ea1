//! Infrastructure layer: I/O boundary implementations
//!
//! This layer implements I/O boundary traits for the interactive session.

pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use traits::{Console, StdConsole};
