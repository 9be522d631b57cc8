//! Pagination cursor over a match set.

use std::num::NonZeroUsize;

/// Page size used when configuration does not set one.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

/// How many fixed-size pages of the match set are revealed.
///
/// `pages_revealed` is never zero: a fresh or reset cursor shows one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: NonZeroUsize,
    pages_revealed: usize,
}

impl PaginationCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            pages_revealed: 1,
        }
    }

    pub fn reset(&mut self) {
        self.pages_revealed = 1;
    }

    pub fn advance(&mut self) {
        self.pages_revealed = self.pages_revealed.saturating_add(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn pages_revealed(&self) -> usize {
        self.pages_revealed
    }

    /// Upper bound of the revealed window before clamping to the match set.
    pub fn revealed(&self) -> usize {
        self.pages_revealed.saturating_mul(self.page_size.get())
    }

    /// Number of records rendered for a match set of `len` records.
    pub fn visible_count(&self, len: usize) -> usize {
        self.revealed().min(len)
    }

    /// Index of the last record in the revealed window. May point past the
    /// end of a short match set.
    pub fn last_revealed_index(&self) -> usize {
        self.revealed() - 1
    }

    /// Whether records beyond the visible slice exist.
    pub fn has_more(&self, len: usize) -> bool {
        self.revealed() < len
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
