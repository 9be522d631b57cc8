//! Selection resolver: opaque card id → full record for the detail view.

use std::sync::Arc;

use super::error::Result;
use super::store::{BookRecord, Catalog};

/// Find a record by id. Linear scan over the catalog.
pub fn resolve(id: &str, catalog: &Catalog) -> Option<Arc<BookRecord>> {
    catalog.records().iter().find(|r| r.id == id).cloned()
}

/// A resolved record with its author and genre names, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub record: Arc<BookRecord>,
    pub author: String,
    pub genres: Vec<String>,
}

impl BookDetail {
    pub fn new(record: Arc<BookRecord>, catalog: &Catalog) -> Result<Self> {
        let author = catalog.resolve_author(&record.author_id)?.to_string();
        let genres = catalog
            .genre_names(&record)?
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Self {
            record,
            author,
            genres,
        })
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }
}
