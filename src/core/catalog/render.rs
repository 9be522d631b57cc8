//! Renderer capability consumed by the session.
//!
//! Any surface that can show a list of cards (and an empty state) can sit
//! behind [`Renderer`]. The selection signal travels the other way, as the
//! card's id handed back to [`Session::select`](super::session::Session::select).

use super::error::Result;
use super::store::{BookRecord, Catalog};

/// What a renderer needs to show one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    /// Author display name.
    pub author: String,
    pub image: String,
}

impl BookCard {
    pub fn new(record: &BookRecord, catalog: &Catalog) -> Result<Self> {
        Ok(Self {
            id: record.id.clone(),
            title: record.title.clone(),
            author: catalog.resolve_author(&record.author_id)?.to_string(),
            image: record.image.clone(),
        })
    }
}

pub trait Renderer {
    /// Show `cards` in order, replacing whatever was shown before.
    fn render(&mut self, cards: &[BookCard]);

    /// The match set is empty.
    fn render_empty(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::fixtures::shelf_catalog;

    #[test]
    fn test_card_uses_author_display_name() {
        let catalog = shelf_catalog();
        let card = BookCard::new(&catalog.records()[1], &catalog).unwrap();
        assert_eq!(card.id, "dune");
        assert_eq!(card.title, "Dune");
        assert_eq!(card.author, "Frank Herbert");
    }
}
