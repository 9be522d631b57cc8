//! Catalog core: query, pagination and "load more" expansion over a static
//! book collection.
//!
//! # Overview
//!
//! - **Store**: [`Catalog`], [`BookRecord`], author/genre name tables
//! - **Query**: [`FilterCriteria`] → [`MatchSet`], stable and side-effect free
//! - **Cursor**: [`PaginationCursor`], pages revealed over the match set
//! - **Expansion**: related-record append on "load more"
//! - **Selection**: card id → [`BookDetail`]
//! - **Session**: [`Session`], owns all mutable browsing state
//!
//! ```text
//!   filter form ──FilterCriteria──▶ Session ──BookCard[]──▶ Renderer
//!                    load more ───▶    │     ◀──card id──── (Enter)
//!                                      ▼
//!                                  BookDetail ──▶ detail dialog
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shelfscan::core::catalog::{Catalog, FilterCriteria, Session, DEFAULT_PAGE_SIZE};
//!
//! let catalog = Arc::new(Catalog::bundled()?);
//! let mut session = Session::new(catalog, DEFAULT_PAGE_SIZE);
//! session.start(&mut renderer)?;
//! session.submit_filter(FilterCriteria::new("dune", "any", "any"), &mut renderer)?;
//! session.load_more(&mut renderer)?;
//! ```

pub mod cursor;
pub mod error;
pub mod expansion;
pub mod query;
pub mod render;
pub mod selection;
pub mod session;
pub mod store;

pub use cursor::{PaginationCursor, DEFAULT_PAGE_SIZE};
pub use error::{CatalogError, Result};
pub use expansion::{dedupe_by_id, Expansion};
pub use query::{query, Choice, FilterCriteria, MatchSet, ANY};
pub use render::{BookCard, Renderer};
pub use selection::{resolve, BookDetail};
pub use session::{Session, SessionPhase};
pub use store::{BookRecord, BookRecordBuilder, Catalog};
