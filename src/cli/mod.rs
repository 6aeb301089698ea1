//! CLI layer: argument parsing, the interactive session, and output helpers

pub mod args;
pub mod error;
pub mod output;
pub mod session;

pub use error::{CliError, CliResult};
pub use session::Session;
