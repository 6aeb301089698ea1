//! Book entity and theme parsing

use std::fmt;

/// A catalogued book. Value-like: never mutated after insertion.
///
/// `year` is kept as raw text, exactly as entered; it is display data,
/// not something the catalog orders or validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: String,
    /// Free-text tags, zero or more, in entry order
    pub themes: Vec<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        themes: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            themes,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.year)
    }
}

/// Parse a raw comma-separated theme string into theme tokens.
///
/// Splits on `,` and trims each token. Empty tokens are NOT filtered:
/// a trailing comma yields a trailing `""` token, and an empty input
/// yields `[""]` rather than an empty vec. Callers that want "no themes"
/// must construct the book with an empty vec directly.
pub fn parse_themes(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("scifi", vec!["scifi"])]
    #[case("scifi, horror", vec!["scifi", "horror"])]
    #[case("  scifi ,horror  ", vec!["scifi", "horror"])]
    #[case("scifi,", vec!["scifi", ""])]
    #[case("", vec![""])]
    #[case(",", vec!["", ""])]
    fn given_raw_theme_string_when_parsing_then_splits_and_trims(
        #[case] raw: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(parse_themes(raw), expected);
    }

    #[test]
    fn given_book_when_displayed_then_shows_title_author_year() {
        let book = Book::new("Dune", "Herbert", "1965", vec!["scifi".into()]);
        assert_eq!(book.to_string(), "Dune by Herbert (1965)");
    }
}
