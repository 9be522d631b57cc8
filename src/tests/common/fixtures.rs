//! Test Fixtures
//!
//! Small hand-built catalogs and a renderer that records what it was asked
//! to show.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::core::catalog::{BookCard, BookRecord, Catalog, Renderer};

// =============================================================================
// Catalog Fixtures
// =============================================================================

fn name_table(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

/// A(author=1,[x]), B(author=1,[y]), C(author=2,[x]), D(author=3,[z]).
pub fn scenario_catalog() -> Catalog {
    let books = vec![
        BookRecord::builder("A", "Alpha", "1").genre("x").build(),
        BookRecord::builder("B", "Bravo", "1").genre("y").build(),
        BookRecord::builder("C", "Charlie", "2").genre("x").build(),
        BookRecord::builder("D", "Delta", "3").genre("z").build(),
    ];
    Catalog::new(
        name_table(&[("1", "Author One"), ("2", "Author Two"), ("3", "Author Three")]),
        name_table(&[("x", "Genre X"), ("y", "Genre Y"), ("z", "Genre Z")]),
        books,
    )
    .expect("scenario catalog is valid")
}

/// Ten well-known titles across seven authors and six genres.
pub fn shelf_catalog() -> Catalog {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
    let books = vec![
        BookRecord::builder("left-hand", "The Left Hand of Darkness", "le-guin")
            .genre("sf")
            .published(date(1969, 3, 1))
            .build(),
        BookRecord::builder("dune", "Dune", "herbert")
            .genre("sf")
            .genre("classic")
            .published(date(1965, 8, 1))
            .build(),
        BookRecord::builder("orient", "Murder on the Orient Express", "christie")
            .genre("mystery")
            .genre("classic")
            .published(date(1934, 1, 1))
            .build(),
        BookRecord::builder("hobbit", "The Hobbit", "tolkien")
            .genre("fantasy")
            .genre("classic")
            .published(date(1937, 9, 21))
            .build(),
        BookRecord::builder("fellowship", "The Fellowship of the Ring", "tolkien")
            .genre("fantasy")
            .published(date(1954, 7, 29))
            .build(),
        BookRecord::builder("pride", "Pride and Prejudice", "austen")
            .genre("romance")
            .genre("classic")
            .published(date(1813, 1, 28))
            .build(),
        BookRecord::builder("hound", "The Hound of the Baskervilles", "doyle")
            .genre("mystery")
            .genre("horror")
            .image("https://covers.example.org/hound.jpg")
            .description("A spectral hound on the moors.")
            .published(date(1902, 4, 1))
            .build(),
        BookRecord::builder("none", "And Then There Were None", "christie")
            .genre("mystery")
            .published(date(1939, 11, 6))
            .build(),
        BookRecord::builder("messiah", "Dune Messiah", "herbert")
            .genre("sf")
            .published(date(1969, 10, 15))
            .build(),
        BookRecord::builder("frankenstein", "Frankenstein", "shelley")
            .genre("horror")
            .genre("sf")
            .published(date(1818, 1, 1))
            .build(),
    ];
    Catalog::new(
        name_table(&[
            ("le-guin", "Ursula K. Le Guin"),
            ("herbert", "Frank Herbert"),
            ("christie", "Agatha Christie"),
            ("tolkien", "J. R. R. Tolkien"),
            ("austen", "Jane Austen"),
            ("doyle", "Arthur Conan Doyle"),
            ("shelley", "Mary Shelley"),
        ]),
        name_table(&[
            ("sf", "Science Fiction"),
            ("fantasy", "Fantasy"),
            ("mystery", "Mystery"),
            ("romance", "Romance"),
            ("horror", "Horror"),
            ("classic", "Classic"),
        ]),
        books,
    )
    .expect("shelf catalog is valid")
}

pub fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("page size must be non-zero")
}

/// Ids of a record slice, in order.
pub fn ids(records: &[Arc<BookRecord>]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================================
// Renderer Fixtures
// =============================================================================

/// One call received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Cards(Vec<String>),
    Empty,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub shown: Vec<Shown>,
}

impl RecordingRenderer {
    pub fn last(&self) -> Option<&Shown> {
        self.shown.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, cards: &[BookCard]) {
        self.shown
            .push(Shown::Cards(cards.iter().map(|c| c.id.clone()).collect()));
    }

    fn render_empty(&mut self) {
        self.shown.push(Shown::Empty);
    }
}

/// Card ids of the most recent render, or nothing if it was the empty state.
pub fn card_ids(renderer: &RecordingRenderer) -> Vec<String> {
    match renderer.last() {
        Some(Shown::Cards(ids)) => ids.clone(),
        _ => Vec::new(),
    }
}
