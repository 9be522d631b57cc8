//! Expansion policy for "load more".
//!
//! The anchor is the last record of the revealed window, read before the
//! cursor moves. Every catalog record related to it (same author, or a shared
//! genre) is appended to the match set as-is. Records already present are
//! appended again, and the cursor advances two pages per call. Both effects
//! are kept deliberately; [`dedupe_by_id`] is a separate opt-in step.

use std::collections::HashSet;
use std::sync::Arc;

use super::cursor::PaginationCursor;
use super::query::MatchSet;
use super::store::{BookRecord, Catalog};

/// Pages the cursor advances on each "load more".
pub const PAGES_PER_LOAD_MORE: usize = 2;

/// What a single "load more" did to the match set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The record the related scan was seeded from, if the window had one.
    pub anchor: Option<Arc<BookRecord>>,
    /// Number of records appended to the match set.
    pub appended: usize,
}

/// The last record of the revealed window, if the match set reaches that far.
pub fn anchor<'a>(matches: &'a [Arc<BookRecord>], cursor: &PaginationCursor) -> Option<&'a Arc<BookRecord>> {
    matches.get(cursor.last_revealed_index())
}

/// Whether `candidate` is related to `anchor`. A record is not related to itself.
pub fn is_related(anchor: &BookRecord, candidate: &BookRecord) -> bool {
    candidate.id != anchor.id
        && (candidate.author_id == anchor.author_id || candidate.shares_genre_with(anchor))
}

/// Catalog records related to `anchor`, in catalog order.
pub fn related<'a>(
    catalog: &'a Catalog,
    anchor: &'a BookRecord,
) -> impl Iterator<Item = &'a Arc<BookRecord>> + 'a {
    catalog
        .records()
        .iter()
        .filter(move |candidate| is_related(anchor, candidate))
}

/// Apply one "load more" to `matches` and `cursor`.
///
/// With no anchor (the match set is shorter than the revealed window) nothing
/// is appended, but the cursor still advances.
pub fn load_more(catalog: &Catalog, matches: &mut MatchSet, cursor: &mut PaginationCursor) -> Expansion {
    let anchor = anchor(matches, cursor).cloned();

    let appended = match anchor.as_deref() {
        Some(anchor) => {
            let before = matches.len();
            matches.extend(related(catalog, anchor).cloned());
            matches.len() - before
        }
        None => 0,
    };

    for _ in 0..PAGES_PER_LOAD_MORE {
        cursor.advance();
    }

    Expansion { anchor, appended }
}

/// Drop repeated records, keeping the first occurrence of each id.
pub fn dedupe_by_id(matches: MatchSet) -> MatchSet {
    let mut seen = HashSet::with_capacity(matches.len());
    matches
        .into_iter()
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}
