//! Browsing session: the single owner of the match set, the cursor and the
//! detail dialog state.
//!
//! Phases:
//!
//! ```text
//! Idle ──start/submit_filter──▶ Filtered ──select(found)──▶ DetailOpen
//!                               ▲    │  ◀──dismiss_detail──────┘
//!                               └────┘ submit_filter / load_more
//! ```
//!
//! Handlers that change what is visible push the new slice into the
//! [`Renderer`] they are given. Filter and load-more requests are ignored
//! while the detail dialog is open.

use std::num::NonZeroUsize;
use std::sync::Arc;

use super::cursor::PaginationCursor;
use super::error::Result;
use super::expansion::{self, Expansion};
use super::query::{self, FilterCriteria, MatchSet};
use super::render::{BookCard, Renderer};
use super::selection::{self, BookDetail};
use super::store::{BookRecord, Catalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing has been queried yet.
    Idle,
    /// A match set is on screen.
    Filtered,
    /// The detail dialog is showing one record.
    DetailOpen(BookDetail),
}

pub struct Session {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    matches: MatchSet,
    cursor: PaginationCursor,
    phase: SessionPhase,
    dedupe_on_load_more: bool,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, page_size: NonZeroUsize) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::any(),
            matches: MatchSet::new(),
            cursor: PaginationCursor::new(page_size),
            phase: SessionPhase::Idle,
            dedupe_on_load_more: false,
        }
    }

    /// Remove repeated records after every "load more".
    pub fn with_dedupe_on_load_more(mut self, enabled: bool) -> Self {
        self.dedupe_on_load_more = enabled;
        self
    }

    // ── Event handlers ──────────────────────────────────────────────────

    /// Show the whole catalog. Equivalent to submitting default criteria.
    pub fn start<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        self.submit_filter(FilterCriteria::any(), renderer).map(|_| ())
    }

    /// Replace the match set with a fresh query and show its first page.
    ///
    /// Returns the number of matches, or `None` if the detail dialog is open.
    pub fn submit_filter<R: Renderer + ?Sized>(
        &mut self,
        criteria: FilterCriteria,
        renderer: &mut R,
    ) -> Result<Option<usize>> {
        if self.is_detail_open() {
            log::debug!("Filter submission ignored while detail dialog is open");
            return Ok(None);
        }

        self.matches = query::query(&self.catalog, &criteria);
        self.cursor.reset();
        self.criteria = criteria;
        self.phase = SessionPhase::Filtered;

        log::info!(
            "Filter title={:?} author={} genre={} matched {} of {} books",
            self.criteria.title(),
            self.criteria.author().as_str(),
            self.criteria.genre().as_str(),
            self.matches.len(),
            self.catalog.len()
        );

        self.render(renderer)?;
        Ok(Some(self.matches.len()))
    }

    /// Expand the match set with records related to the last visible one and
    /// reveal more pages.
    ///
    /// Returns `None` when there is no match set yet or the dialog is open.
    pub fn load_more<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<Option<Expansion>> {
        if self.phase != SessionPhase::Filtered {
            log::debug!("Load more ignored in phase {:?}", self.phase);
            return Ok(None);
        }

        let expansion = expansion::load_more(&self.catalog, &mut self.matches, &mut self.cursor);
        if self.dedupe_on_load_more {
            self.matches = expansion::dedupe_by_id(std::mem::take(&mut self.matches));
        }

        match expansion.anchor.as_deref() {
            Some(anchor) => log::info!(
                "Load more: anchor {} appended {} related, match set now {}, pages {}",
                anchor.id,
                expansion.appended,
                self.matches.len(),
                self.cursor.pages_revealed()
            ),
            None => log::debug!(
                "Load more: no anchor in {} matches, pages {}",
                self.matches.len(),
                self.cursor.pages_revealed()
            ),
        }

        self.render(renderer)?;
        Ok(Some(expansion))
    }

    /// Open the detail dialog for `id`. An unknown id leaves the session
    /// unchanged and returns `false`.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        if self.phase != SessionPhase::Filtered {
            return Ok(false);
        }
        let Some(record) = selection::resolve(id, &self.catalog) else {
            log::debug!("Selection of unknown id {id:?} ignored");
            return Ok(false);
        };

        self.phase = SessionPhase::DetailOpen(BookDetail::new(record, &self.catalog)?);
        Ok(true)
    }

    /// Close the detail dialog. Returns `false` if it was not open.
    pub fn dismiss_detail(&mut self) -> bool {
        if self.is_detail_open() {
            self.phase = SessionPhase::Filtered;
            true
        } else {
            false
        }
    }

    /// Push the current visible slice (or the empty state) to `renderer`.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        if self.matches.is_empty() {
            renderer.render_empty();
            return Ok(());
        }
        let cards = self
            .visible()
            .iter()
            .map(|record| BookCard::new(record, &self.catalog))
            .collect::<Result<Vec<_>>>()?;
        renderer.render(&cards);
        Ok(())
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn matches(&self) -> &[Arc<BookRecord>] {
        &self.matches
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    /// The rendered prefix of the match set.
    pub fn visible(&self) -> &[Arc<BookRecord>] {
        &self.matches[..self.cursor.visible_count(self.matches.len())]
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.matches.len())
    }

    pub fn detail(&self) -> Option<&BookDetail> {
        match &self.phase {
            SessionPhase::DetailOpen(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_detail_open(&self) -> bool {
        matches!(self.phase, SessionPhase::DetailOpen(_))
    }
}
