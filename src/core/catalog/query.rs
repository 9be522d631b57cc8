//! Query engine: filter criteria → ordered match set.

use std::sync::Arc;

use super::store::{BookRecord, Catalog};

/// Ordered result of a filter or expansion. Duplicates are allowed.
pub type MatchSet = Vec<Arc<BookRecord>>;

/// Wire value meaning "no constraint" for author/genre.
pub const ANY: &str = "any";

/// An author or genre constraint: either unconstrained or one exact id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    Any,
    Id(String),
}

impl Choice {
    /// Parse a form value. `"any"` (any case) and blank values mean [`Choice::Any`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(ANY) {
            Self::Any
        } else {
            Self::Id(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Id(id) => id,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<&str> for Choice {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// One filter submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    title: String,
    author: Choice,
    genre: Choice,
}

impl FilterCriteria {
    /// Build criteria from form input. The title substring is trimmed here.
    pub fn new(title: impl AsRef<str>, author: impl Into<Choice>, genre: impl Into<Choice>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            author: author.into(),
            genre: genre.into(),
        }
    }

    /// Criteria that match the whole catalog.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Choice {
        &self.author
    }

    pub fn genre(&self) -> &Choice {
        &self.genre
    }

    /// Whether these criteria accept every record.
    pub fn is_unfiltered(&self) -> bool {
        self.title.is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Check a single record against all three predicates.
    pub fn matches(&self, record: &BookRecord) -> bool {
        Predicate::new(self).test(record)
    }
}

/// Criteria with the title needle case-folded once.
struct Predicate<'a> {
    needle: String,
    author: &'a Choice,
    genre: &'a Choice,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            needle: criteria.title.to_lowercase(),
            author: &criteria.author,
            genre: &criteria.genre,
        }
    }

    fn test(&self, record: &BookRecord) -> bool {
        let title_ok = self.needle.is_empty() || record.title.to_lowercase().contains(&self.needle);
        let author_ok = match self.author {
            Choice::Any => true,
            Choice::Id(id) => record.author_id == *id,
        };
        let genre_ok = match self.genre {
            Choice::Any => true,
            Choice::Id(id) => record.has_genre(id),
        };
        title_ok && author_ok && genre_ok
    }
}

/// Run `criteria` over the catalog. Catalog order is preserved; an empty
/// result is a valid match set.
pub fn query(catalog: &Catalog, criteria: &FilterCriteria) -> MatchSet {
    let predicate = Predicate::new(criteria);
    catalog
        .records()
        .iter()
        .filter(|record| predicate.test(record))
        .cloned()
        .collect()
}
