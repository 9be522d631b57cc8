//! Property-based tests for the catalog core
//!
//! These verify invariants over randomly generated catalogs and criteria
//! rather than hand-picked cases.
//!
//! ## Test Modules
//!
//! - `query_props`: Query engine
//!   - Every match satisfies all three predicates
//!   - Result is an in-order subsequence of the catalog with no duplicates
//!   - Default criteria return the whole catalog
//!
//! - `session_props`: Cursor and load-more
//!   - A filter submission always shows `min(page_size, matches)` records
//!   - One load-more from a fresh filter reveals three pages
//!   - The match set grows by exactly the related records of the anchor
//!
//! ## Configuration
//!
//! proptest runs 256 cases per property by default; override with
//! `PROPTEST_CASES`:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod query_props;
mod session_props;

use proptest::prelude::*;

use crate::core::catalog::{BookRecord, Catalog};

const AUTHORS: [&str; 4] = ["a0", "a1", "a2", "a3"];
const GENRES: [&str; 5] = ["g0", "g1", "g2", "g3", "g4"];

/// Strategy for a valid catalog of up to `max` books with unique ids.
pub(crate) fn arb_catalog(max: usize) -> impl Strategy<Value = Catalog> {
    let book = (
        "[a-cA-C ]{0,8}",
        0..AUTHORS.len(),
        proptest::collection::vec(0..GENRES.len(), 0..3),
    );
    proptest::collection::vec(book, 0..=max).prop_map(|raw| {
        let books = raw
            .into_iter()
            .enumerate()
            .map(|(i, (title, author, genres))| {
                genres.into_iter().fold(
                    BookRecord::builder(format!("b{i}"), title, AUTHORS[author]),
                    |b, g| b.genre(GENRES[g]),
                )
            })
            .map(|b| b.build())
            .collect();
        let authors = AUTHORS.iter().map(|a| (a.to_string(), a.to_uppercase())).collect();
        let genres = GENRES.iter().map(|g| (g.to_string(), g.to_uppercase())).collect();
        Catalog::new(authors, genres, books).expect("generated catalog is valid")
    })
}

/// Strategy for an author or genre form value drawn from `pool`, or `"any"`.
pub(crate) fn arb_choice(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        Just("any".to_string()),
        proptest::sample::select(pool).prop_map(str::to_string),
    ]
}

pub(crate) fn authors() -> &'static [&'static str] {
    &AUTHORS
}

pub(crate) fn genres() -> &'static [&'static str] {
    &GENRES
}
