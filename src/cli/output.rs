//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use generational_arena::Index;
use termtree::Tree;

use crate::domain::Catalog;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Render the catalog's search-tree shape for display.
///
/// Children are labeled with their slot (`L`/`R`) so the shape is
/// unambiguous even when a node has a single child. Empty catalogs
/// render as None. Built bottom-up with an explicit post-order stack:
/// a degenerate right-spine catalog is linear in depth, and depth must
/// not translate into stack depth here any more than in the traversals.
pub fn catalog_tree(catalog: &Catalog) -> Option<Tree<String>> {
    let root = catalog.root()?;
    let mut work: Vec<(Index, &'static str, bool)> = vec![(root, "", false)];
    // Completed subtrees in post-order; a node's children sit on top
    // (right above left) when the node itself is popped as visited.
    let mut done: Vec<Tree<String>> = Vec::new();

    while let Some((idx, slot, visited)) = work.pop() {
        let Some(node) = catalog.get_node(idx) else {
            continue;
        };
        if !visited {
            work.push((idx, slot, true));
            if let Some(right) = node.right {
                work.push((right, "R: ", false));
            }
            if let Some(left) = node.left {
                work.push((left, "L: ", false));
            }
        } else {
            let mut tree = Tree::new(format!("{}{}", slot, node.book.title));
            let right = node.right.and_then(|_| done.pop());
            let left = node.left.and_then(|_| done.pop());
            if let Some(left) = left {
                tree.push(left);
            }
            if let Some(right) = right {
                tree.push(right);
            }
            done.push(tree);
        }
    }
    done.pop()
}
