//! Catalog store: the immutable book collection plus author/genre name tables.
//!
//! A [`Catalog`] can only be obtained through a validating constructor, so
//! every record it holds references a known author and known genres. Lookups
//! on records taken from the same catalog therefore cannot fail in practice,
//! but they still return `Result` so a bad id from outside is reported.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{CatalogError, Result};

/// Bundled sample catalog used when no catalog path is configured.
const BUNDLED_CATALOG: &str = include_str!("../../../assets/catalog.json");

// ── Records ─────────────────────────────────────────────────────────────────

/// A single book in the catalog. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author_id: String,
    /// Genre ids. Set semantics; order carries no meaning.
    #[serde(default)]
    pub genre_ids: Vec<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub published_date: NaiveDate,
}

impl BookRecord {
    /// Create a builder for constructing a record.
    pub fn builder(
        id: impl Into<String>,
        title: impl Into<String>,
        author_id: impl Into<String>,
    ) -> BookRecordBuilder {
        BookRecordBuilder::new(id, title, author_id)
    }

    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genre_ids.iter().any(|g| g == genre_id)
    }

    /// Whether the two records have at least one genre in common.
    pub fn shares_genre_with(&self, other: &BookRecord) -> bool {
        self.genre_ids.iter().any(|g| other.has_genre(g))
    }
}

/// Builder for records with optional fields.
#[derive(Clone, Debug)]
pub struct BookRecordBuilder {
    record: BookRecord,
}

impl BookRecordBuilder {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            record: BookRecord {
                id: id.into(),
                title: title.into(),
                author_id: author_id.into(),
                genre_ids: Vec::new(),
                image: String::new(),
                description: String::new(),
                published_date: NaiveDate::default(),
            },
        }
    }

    /// Add one genre id.
    pub fn genre(mut self, genre_id: impl Into<String>) -> Self {
        self.record.genre_ids.push(genre_id.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.record.image = url.into();
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.record.description = text.into();
        self
    }

    pub fn published(mut self, date: NaiveDate) -> Self {
        self.record.published_date = date;
        self
    }

    pub fn build(self) -> BookRecord {
        self.record
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// Wire shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    authors: IndexMap<String, String>,
    #[serde(default)]
    genres: IndexMap<String, String>,
    #[serde(default)]
    books: Vec<BookRecord>,
}

/// The full, read-only book collection in load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Arc<BookRecord>>,
    authors: IndexMap<String, String>,
    genres: IndexMap<String, String>,
}

impl Catalog {
    /// Build a catalog, checking that every author/genre reference resolves
    /// and that book ids are unique.
    pub fn new(
        authors: IndexMap<String, String>,
        genres: IndexMap<String, String>,
        books: Vec<BookRecord>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::integrity(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
            if !authors.contains_key(&book.author_id) {
                return Err(CatalogError::integrity(format!(
                    "book '{}' references unknown author '{}'",
                    book.id, book.author_id
                )));
            }
            if let Some(genre) = book.genre_ids.iter().find(|g| !genres.contains_key(*g)) {
                return Err(CatalogError::integrity(format!(
                    "book '{}' references unknown genre '{}'",
                    book.id, genre
                )));
            }
        }

        Ok(Self {
            records: books.into_iter().map(Arc::new).collect(),
            authors,
            genres,
        })
    }

    /// Parse and validate a catalog JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.authors, doc.genres, doc.books)
    }

    /// Read a catalog JSON file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        log::info!(
            "Loaded catalog from {} ({} books, {} authors, {} genres)",
            path.display(),
            catalog.len(),
            catalog.authors.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// The sample catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load from `path` when given, otherwise the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => {
                log::info!("No catalog path configured; using bundled catalog");
                Self::bundled()
            }
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[Arc<BookRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Author id → display name, in load order.
    pub fn authors(&self) -> &IndexMap<String, String> {
        &self.authors
    }

    /// Genre id → display name, in load order.
    pub fn genres(&self) -> &IndexMap<String, String> {
        &self.genres
    }

    pub fn resolve_author(&self, id: &str) -> Result<&str> {
        self.authors
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::AuthorNotFound(id.to_string()))
    }

    pub fn resolve_genre(&self, id: &str) -> Result<&str> {
        self.genres
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::GenreNotFound(id.to_string()))
    }

    /// Display names for all genres of `record`, in the record's order.
    pub fn genre_names(&self, record: &BookRecord) -> Result<Vec<&str>> {
        record
            .genre_ids
            .iter()
            .map(|g| self.resolve_genre(g))
            .collect()
    }
}
