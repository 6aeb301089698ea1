//! Tests for the title-ordered catalog tree

use librarium::domain::{Book, Catalog, DomainError};

fn book(title: &str, author: &str) -> Book {
    Book::new(title, author, "2000", vec![])
}

// ============================================================
// Insertion / Ordering Tests
// ============================================================

#[test]
fn given_two_books_when_listing_then_returns_title_order() {
    let mut catalog = Catalog::new();
    catalog.insert(Book::new("Dune", "Herbert", "1965", vec!["scifi".into()]));
    catalog.insert(Book::new(
        "Foundation",
        "Asimov",
        "1951",
        vec!["scifi".into()],
    ));

    let titles: Vec<&str> = catalog
        .list_in_order()
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, ["Dune", "Foundation"]);
}

#[test]
fn given_unsorted_insertions_when_listing_then_sequence_is_non_decreasing() {
    let mut catalog = Catalog::new();
    let input = ["Mango", "Apple", "Zebra", "Mango", "Banana", "Apple"];
    for title in input {
        catalog.insert(book(title, "author"));
    }

    let listed = catalog.list_in_order();
    assert_eq!(listed.len(), input.len());
    for pair in listed.windows(2) {
        assert!(
            pair[0].title <= pair[1].title,
            "not sorted: {} > {}",
            pair[0].title,
            pair[1].title
        );
    }
}

#[test]
fn given_catalog_when_listing_twice_then_sequences_are_identical() {
    let mut catalog = Catalog::new();
    for title in ["C", "A", "B"] {
        catalog.insert(book(title, "author"));
    }

    let first: Vec<Book> = catalog.list_in_order().into_iter().cloned().collect();
    let second: Vec<Book> = catalog.list_in_order().into_iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn given_empty_catalog_when_listing_then_returns_empty_sequence() {
    let catalog = Catalog::new();
    assert!(catalog.list_in_order().is_empty());
    assert!(catalog.is_empty());
}

// ============================================================
// Duplicate Title Tests
// ============================================================

#[test]
fn given_duplicate_titles_when_listing_then_all_copies_present() {
    let mut catalog = Catalog::new();
    catalog.insert(book("Dune", "first"));
    catalog.insert(book("Dune", "second"));
    catalog.insert(book("Dune", "third"));

    let authors: Vec<&str> = catalog
        .list_in_order()
        .iter()
        .map(|b| b.author.as_str())
        .collect();
    assert_eq!(authors.len(), 3);
    // Ties go right: equal titles come back in insertion order
    assert_eq!(authors, ["first", "second", "third"]);
}

#[test]
fn given_duplicate_titles_when_finding_then_returns_first_inserted() {
    let mut catalog = Catalog::new();
    catalog.insert(book("Dune", "first"));
    catalog.insert(book("Dune", "second"));

    let found = catalog.find_by_title("Dune").unwrap();
    assert_eq!(found.author, "first");
}

// ============================================================
// Lookup Tests
// ============================================================

#[test]
fn given_inserted_title_when_finding_then_returns_matching_book() {
    let mut catalog = Catalog::new();
    for title in ["Mango", "Apple", "Zebra"] {
        catalog.insert(book(title, "author"));
    }

    let found = catalog.find_by_title("Apple").unwrap();
    assert_eq!(found.title, "Apple");
}

#[test]
fn given_unknown_title_when_finding_then_fails_with_book_not_found() {
    let mut catalog = Catalog::new();
    catalog.insert(book("Dune", "Herbert"));

    let err = catalog.find_by_title("Nonexistent").unwrap_err();
    assert_eq!(err, DomainError::BookNotFound("Nonexistent".to_string()));
    assert_eq!(err.to_string(), "book not found: Nonexistent");
}

#[test]
fn given_empty_catalog_when_finding_then_fails_with_book_not_found() {
    let catalog = Catalog::new();
    assert!(catalog.find_by_title("Dune").is_err());
}

// ============================================================
// Degenerate Shape Tests
// ============================================================

#[test]
fn given_sorted_insertion_when_traversing_then_no_stack_overflow() {
    // Sorted input degenerates the tree into a right spine; insert, find
    // and traversal are iterative, so depth must not blow the stack.
    let mut catalog = Catalog::new();
    let count = 20_000;
    for i in 0..count {
        catalog.insert(book(&format!("{:08}", i), "author"));
    }

    assert_eq!(catalog.len(), count);
    let listed = catalog.list_in_order();
    assert_eq!(listed.len(), count);
    assert_eq!(listed[0].title, "00000000");

    let last = format!("{:08}", count - 1);
    assert_eq!(catalog.find_by_title(&last).unwrap().title, last);
}
