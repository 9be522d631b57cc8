//! Error types for the catalog core.
//!
//! Only load-time problems are real errors here. A selection id that does not
//! resolve, or a "load more" with no anchor, are `Option::None` at the call
//! site, and an empty query result is just an empty match set.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug, Diagnostic)]
pub enum CatalogError {
    // =========================================================================
    // Load Errors (fatal at startup)
    // =========================================================================

    /// A record references an author or genre the catalog does not define,
    /// or two records share an id.
    #[error("Catalog data integrity violation: {reason}")]
    #[diagnostic(
        code(shelfscan::catalog::integrity),
        help("Every book must reference a listed author and listed genres, and book ids must be unique")
    )]
    DataIntegrity { reason: String },

    /// The catalog document is not valid JSON or does not have the expected shape.
    #[error("Failed to parse catalog: {0}")]
    #[diagnostic(code(shelfscan::catalog::parse))]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Failed to read catalog at {}: {source}", .path.display())]
    #[diagnostic(
        code(shelfscan::catalog::io),
        help("Pass a readable catalog JSON path, or omit it to use the bundled catalog")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Lookup Errors
    // =========================================================================

    #[error("Author not found: {0}")]
    #[diagnostic(code(shelfscan::catalog::author_not_found))]
    AuthorNotFound(String),

    #[error("Genre not found: {0}")]
    #[diagnostic(code(shelfscan::catalog::genre_not_found))]
    GenreNotFound(String),
}

impl CatalogError {
    pub(crate) fn integrity(reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            reason: reason.into(),
        }
    }

    /// Whether this error is a failed id lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AuthorNotFound(_) | Self::GenreNotFound(_))
    }
}
