//! Library service: the catalog and author graph behind one state value.

use std::collections::BTreeSet;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::{AuthorGraph, Book, Catalog};

/// Session-wide library state.
///
/// Owns the title index and the author graph; every insertion feeds both.
/// Created empty at session start, discarded at process end. Passed by
/// reference into operations rather than living as a module-level
/// singleton, so it stays testable.
#[derive(Debug, Default)]
pub struct Library {
    catalog: Catalog,
    graph: AuthorGraph,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog and register its author relations.
    /// Never fails; neither structure can reject an insertion.
    pub fn add_book(&mut self, book: Book) {
        debug!("add_book: {}", book);
        self.graph.add_book(&book);
        self.catalog.insert(book);
    }

    /// All books, sorted ascending by title.
    pub fn books(&self) -> Vec<&Book> {
        self.catalog.list_in_order()
    }

    /// Exact-title lookup; fails with `BookNotFound` on a miss.
    pub fn find_by_title(&self, title: &str) -> ApplicationResult<&Book> {
        Ok(self.catalog.find_by_title(title)?)
    }

    /// Authors related to the given author (empty for unknown authors).
    pub fn relations(&self, author: &str) -> BTreeSet<String> {
        self.graph.relations(author)
    }

    /// All authors, in first-insertion order.
    pub fn authors(&self) -> &[String] {
        self.graph.authors()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &AuthorGraph {
        &self.graph
    }
}
