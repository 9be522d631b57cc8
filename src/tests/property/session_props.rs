//! Property-based tests for pagination and "load more"
//!
//! Tests invariants:
//! - After a filter submission one page is revealed
//! - One load-more from a fresh filter reveals three pages
//! - The match set grows by exactly the anchor's related catalog records
//! - The visible slice never exceeds the match set

use std::sync::Arc;

use proptest::prelude::*;

use super::{arb_catalog, arb_choice, genres};
use crate::core::catalog::expansion::is_related;
use crate::core::catalog::{FilterCriteria, Session};
use crate::tests::common::fixtures::{page_size, RecordingRenderer};

proptest! {
    #[test]
    fn prop_filter_reveals_first_page(
        catalog in arb_catalog(30),
        size in 1usize..10,
        genre in arb_choice(genres()),
    ) {
        let mut session = Session::new(Arc::new(catalog), page_size(size));
        let mut renderer = RecordingRenderer::default();

        let count = session
            .submit_filter(FilterCriteria::new("", "any", genre.as_str()), &mut renderer)
            .expect("render succeeds")
            .expect("not blocked by dialog");

        prop_assert_eq!(session.cursor().pages_revealed(), 1);
        prop_assert_eq!(session.visible().len(), size.min(count));
    }

    #[test]
    fn prop_load_more_grows_by_related_records(
        catalog in arb_catalog(30),
        size in 1usize..6,
    ) {
        let mut session = Session::new(Arc::new(catalog), page_size(size));
        let mut renderer = RecordingRenderer::default();
        session.start(&mut renderer).expect("start");

        let before = session.matches().len();
        let anchor = session.matches().get(size - 1).cloned();
        let expected_related = anchor
            .as_deref()
            .map(|a| {
                session
                    .catalog()
                    .records()
                    .iter()
                    .filter(|c| is_related(a, c))
                    .count()
            })
            .unwrap_or(0);

        let expansion = session
            .load_more(&mut renderer)
            .expect("render succeeds")
            .expect("session is filtered");

        prop_assert_eq!(session.cursor().pages_revealed(), 3);
        prop_assert_eq!(expansion.appended, expected_related);
        prop_assert_eq!(session.matches().len(), before + expected_related);
        prop_assert_eq!(
            expansion.anchor.as_ref().map(|a| a.id.clone()),
            anchor.map(|a| a.id.clone())
        );
    }

    #[test]
    fn prop_visible_never_exceeds_matches(
        catalog in arb_catalog(20),
        size in 1usize..5,
        loads in 0usize..4,
    ) {
        let mut session = Session::new(Arc::new(catalog), page_size(size));
        let mut renderer = RecordingRenderer::default();
        session.start(&mut renderer).expect("start");

        for _ in 0..loads {
            session.load_more(&mut renderer).expect("load more");
        }

        prop_assert!(session.visible().len() <= session.matches().len());
        prop_assert_eq!(session.cursor().pages_revealed(), 1 + 2 * loads);
        prop_assert_eq!(
            session.visible().len(),
            (session.cursor().pages_revealed() * size).min(session.matches().len())
        );
    }
}
