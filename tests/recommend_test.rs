//! Tests for recommendation queries over the catalog traversal

use librarium::application::{recommend_by_author, recommend_by_theme};
use librarium::domain::{Book, Catalog};
use rstest::{fixture, rstest};

/// Scenario-1 catalog: Dune and Foundation, both tagged scifi.
#[fixture]
fn scifi_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(Book::new(
        "Foundation",
        "Asimov",
        "1951",
        vec!["scifi".into()],
    ));
    catalog.insert(Book::new("Dune", "Herbert", "1965", vec!["scifi".into()]));
    catalog
}

// ============================================================
// Theme Query Tests
// ============================================================

#[rstest]
fn given_matching_theme_when_recommending_then_returns_books_in_title_order(
    scifi_catalog: Catalog,
) {
    let titles: Vec<&str> = recommend_by_theme(&scifi_catalog, "scifi")
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    // Title order, regardless of insertion order
    assert_eq!(titles, ["Dune", "Foundation"]);
}

#[rstest]
fn given_unmatched_theme_when_recommending_then_returns_empty(scifi_catalog: Catalog) {
    assert!(recommend_by_theme(&scifi_catalog, "horror").is_empty());
}

#[test]
fn given_theme_when_recommending_then_matches_exact_tokens_only() {
    let mut catalog = Catalog::new();
    catalog.insert(Book::new(
        "Dune",
        "Herbert",
        "1965",
        vec!["science fiction".into()],
    ));

    assert!(recommend_by_theme(&catalog, "science").is_empty());
    assert_eq!(recommend_by_theme(&catalog, "science fiction").len(), 1);
}

// ============================================================
// Author Query Tests
// ============================================================

#[rstest]
fn given_author_with_books_when_recommending_then_returns_only_their_books(
    scifi_catalog: Catalog,
) {
    let books = recommend_by_author(&scifi_catalog, "Herbert");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
}

#[rstest]
fn given_author_match_when_recommending_then_comparison_is_case_sensitive(
    scifi_catalog: Catalog,
) {
    assert!(recommend_by_author(&scifi_catalog, "herbert").is_empty());
}

#[test]
fn given_author_with_several_books_when_recommending_then_titles_ascend() {
    let mut catalog = Catalog::new();
    catalog.insert(Book::new("Messiah", "Herbert", "1969", vec![]));
    catalog.insert(Book::new("Dune", "Herbert", "1965", vec![]));
    catalog.insert(Book::new("Foundation", "Asimov", "1951", vec![]));

    let titles: Vec<&str> = recommend_by_author(&catalog, "Herbert")
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, ["Dune", "Messiah"]);
}

#[test]
fn given_empty_catalog_when_recommending_then_returns_empty() {
    let catalog = Catalog::new();
    assert!(recommend_by_author(&catalog, "Herbert").is_empty());
    assert!(recommend_by_theme(&catalog, "scifi").is_empty());
}
