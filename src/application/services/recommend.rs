//! Recommendation queries: filtered views of the catalog's ordered traversal.
//!
//! Stateless; results carry no ranking beyond title order.

use tracing::debug;

use crate::domain::{Book, Catalog};

/// Books by the given author, in title order. Case-sensitive equality.
pub fn recommend_by_author<'a>(catalog: &'a Catalog, author: &str) -> Vec<&'a Book> {
    debug!("recommend_by_author: {}", author);
    catalog
        .iter_in_order()
        .map(|(_, node)| &node.book)
        .filter(|book| book.author == author)
        .collect()
}

/// Books whose theme list contains the given theme exactly, in title order.
pub fn recommend_by_theme<'a>(catalog: &'a Catalog, theme: &str) -> Vec<&'a Book> {
    debug!("recommend_by_theme: {}", theme);
    catalog
        .iter_in_order()
        .map(|(_, node)| &node.book)
        .filter(|book| book.themes.iter().any(|t| t == theme))
        .collect()
}
