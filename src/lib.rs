//! librarium: an in-memory book catalog for a single interactive session.
//!
//! The core is the indexing/relation subsystem: a title-ordered binary
//! search tree ([`domain::Catalog`]), an undirected author relation graph
//! ([`domain::AuthorGraph`]), and recommendation queries over the ordered
//! traversal ([`application::services::recommend`]). Everything lives in
//! memory and is discarded at process exit.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
