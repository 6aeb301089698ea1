//! Title-ordered book index backed by an arena-based binary search tree.
//!
//! Uses generational arena for memory-safe node references; child slots are
//! optional indices, so no sentinel nodes and no parent back-references.
//! The tree is unbalanced: shape depends on insertion order, and a sorted
//! insertion sequence degenerates into a list. All operations are iterative
//! so depth never translates into stack depth.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::book::Book;
use crate::domain::error::{DomainError, DomainResult};

/// Tree node owning exactly one book and up to two children.
#[derive(Debug)]
pub struct BookNode {
    pub book: Book,
    /// Titles strictly less than this node's title
    pub left: Option<Index>,
    /// Titles not less than this node's title (ties go right)
    pub right: Option<Index>,
}

/// Binary search tree keyed by title.
///
/// Invariant: for every node, all titles in the left subtree compare
/// lexicographically less than the node's title, all titles in the right
/// subtree compare not-less. Duplicate titles are permitted; among equals,
/// the earliest-inserted sits highest on the ties-go-right path.
#[derive(Debug)]
pub struct Catalog {
    arena: Arena<BookNode>,
    root: Option<Index>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a book as a new leaf. Never fails, never rebalances.
    #[instrument(level = "trace", skip(self, book), fields(title = %book.title))]
    pub fn insert(&mut self, book: Book) -> Index {
        let node_idx = self.arena.insert(BookNode {
            book,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(node_idx);
            return node_idx;
        };

        loop {
            let go_left = self.arena[node_idx].book.title < self.arena[current].book.title;
            let child = if go_left {
                self.arena[current].left
            } else {
                self.arena[current].right
            };
            match child {
                Some(next) => current = next,
                None => {
                    if go_left {
                        self.arena[current].left = Some(node_idx);
                    } else {
                        self.arena[current].right = Some(node_idx);
                    }
                    return node_idx;
                }
            }
        }
    }

    /// Exact-title lookup by iterative descent.
    ///
    /// Returns the first node on the comparison path whose title matches;
    /// with duplicate titles that is the earliest-inserted one. Cost is
    /// proportional to tree height (linear worst case).
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_title(&self, title: &str) -> DomainResult<&Book> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.arena[idx];
            if node.book.title == title {
                return Ok(&node.book);
            }
            current = if title < node.book.title.as_str() {
                node.left
            } else {
                node.right
            };
        }
        Err(DomainError::BookNotFound(title.to_string()))
    }

    /// Materialized in-order traversal: all books sorted ascending by title.
    #[instrument(level = "trace", skip(self))]
    pub fn list_in_order(&self) -> Vec<&Book> {
        self.iter_in_order().map(|(_, node)| &node.book).collect()
    }

    /// In-order iterator over `(Index, &BookNode)` pairs.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_in_order(&self) -> InOrderIter {
        InOrderIter::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&BookNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

/// Explicit-stack in-order iterator (left, node, right).
pub struct InOrderIter<'a> {
    catalog: &'a Catalog,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            stack: Vec::new(),
            current: catalog.root,
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = (Index, &'a BookNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.catalog.arena[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &self.catalog.arena[idx];
        self.current = node.right;
        Some((idx, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> Book {
        Book::new(title, "author", "2000", vec![])
    }

    #[test]
    fn given_empty_catalog_when_inserting_then_book_becomes_root() {
        let mut catalog = Catalog::new();
        let idx = catalog.insert(book("Dune"));
        assert_eq!(catalog.root(), Some(idx));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn given_duplicate_titles_when_inserting_then_second_goes_right() {
        let mut catalog = Catalog::new();
        let first = catalog.insert(book("Dune"));
        let second = catalog.insert(book("Dune"));
        let root = catalog.get_node(first).unwrap();
        assert_eq!(root.right, Some(second));
        assert_eq!(root.left, None);
    }
}
