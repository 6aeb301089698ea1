//! Undirected author relation graph.

use std::collections::{BTreeSet, HashMap};

use tracing::instrument;

use crate::domain::book::Book;

/// Adjacency structure over author names.
///
/// Edges are symmetric and unweighted; self-loops never occur. Author
/// insertion order is observable through `authors()`.
#[derive(Debug, Default)]
pub struct AuthorGraph {
    adjacency: HashMap<String, BTreeSet<String>>,
    /// Authors in first-insertion order
    order: Vec<String>,
}

impl AuthorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book's author and infer relations.
    ///
    /// The connectivity test is literally "does this book carry at least
    /// one theme": a book with a non-empty theme list connects its author
    /// to every author already present, regardless of what those authors
    /// wrote about. Theme overlap between books is never compared.
    #[instrument(level = "trace", skip(self, book), fields(author = %book.author))]
    pub fn add_book(&mut self, book: &Book) {
        if !self.adjacency.contains_key(&book.author) {
            self.adjacency.insert(book.author.clone(), BTreeSet::new());
            self.order.push(book.author.clone());
        }

        if book.themes.is_empty() {
            return;
        }

        for other in &self.order {
            if *other == book.author {
                continue;
            }
            if let Some(set) = self.adjacency.get_mut(&book.author) {
                set.insert(other.clone());
            }
            if let Some(set) = self.adjacency.get_mut(other) {
                set.insert(book.author.clone());
            }
        }
    }

    /// Related authors, sorted. Unknown authors yield an empty set.
    #[instrument(level = "trace", skip(self))]
    pub fn relations(&self, author: &str) -> BTreeSet<String> {
        self.adjacency.get(author).cloned().unwrap_or_default()
    }

    /// All author names, in the order first inserted.
    #[instrument(level = "trace", skip(self))]
    pub fn authors(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_same_author_twice_when_adding_then_no_self_loop() {
        let mut graph = AuthorGraph::new();
        graph.add_book(&Book::new("Dune", "Herbert", "1965", vec!["scifi".into()]));
        graph.add_book(&Book::new(
            "Dune Messiah",
            "Herbert",
            "1969",
            vec!["scifi".into()],
        ));
        assert!(graph.relations("Herbert").is_empty());
        assert_eq!(graph.authors(), ["Herbert"]);
    }
}
