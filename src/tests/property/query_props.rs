//! Property-based tests for the query engine
//!
//! Tests invariants:
//! - Every matched record satisfies title, author and genre predicates
//! - Matches form an in-order subsequence of the catalog
//! - No record appears twice
//! - Default criteria return the catalog unchanged

use std::collections::HashSet;

use proptest::prelude::*;

use super::{arb_catalog, arb_choice, authors, genres};
use crate::core::catalog::{query, Choice, FilterCriteria};

proptest! {
    #[test]
    fn prop_matches_satisfy_all_predicates(
        catalog in arb_catalog(24),
        title in "[a-cA-C ]{0,3}",
        author in arb_choice(authors()),
        genre in arb_choice(genres()),
    ) {
        let criteria = FilterCriteria::new(&title, author.as_str(), genre.as_str());
        let needle = title.trim().to_lowercase();

        for record in query(&catalog, &criteria) {
            prop_assert!(needle.is_empty() || record.title.to_lowercase().contains(&needle));
            if let Choice::Id(id) = criteria.author() {
                prop_assert_eq!(&record.author_id, id);
            }
            if let Choice::Id(id) = criteria.genre() {
                prop_assert!(record.has_genre(id));
            }
        }
    }

    #[test]
    fn prop_non_matches_fail_some_predicate(
        catalog in arb_catalog(24),
        title in "[a-c]{0,2}",
        author in arb_choice(authors()),
        genre in arb_choice(genres()),
    ) {
        let criteria = FilterCriteria::new(&title, author.as_str(), genre.as_str());
        let matched: HashSet<String> =
            query(&catalog, &criteria).iter().map(|r| r.id.clone()).collect();

        for record in catalog.records() {
            prop_assert_eq!(criteria.matches(record), matched.contains(&record.id));
        }
    }

    #[test]
    fn prop_result_is_ordered_subsequence(
        catalog in arb_catalog(24),
        title in "[a-c]{0,2}",
        genre in arb_choice(genres()),
    ) {
        let criteria = FilterCriteria::new(&title, "any", genre.as_str());
        let matches = query(&catalog, &criteria);

        let mut positions = Vec::with_capacity(matches.len());
        for m in &matches {
            let pos = catalog.records().iter().position(|r| r.id == m.id);
            prop_assert!(pos.is_some());
            positions.push(pos.unwrap_or_default());
        }
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let unique: HashSet<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        prop_assert_eq!(unique.len(), matches.len());
    }

    #[test]
    fn prop_default_criteria_is_identity(catalog in arb_catalog(24)) {
        let matches = query(&catalog, &FilterCriteria::any());
        let got: Vec<&str> = matches.iter().map(|r| r.id.as_str()).collect();
        let want: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prop_query_is_deterministic(
        catalog in arb_catalog(16),
        author in arb_choice(authors()),
    ) {
        let criteria = FilterCriteria::new("", author.as_str(), "any");
        prop_assert_eq!(query(&catalog, &criteria), query(&catalog, &criteria));
    }
}
