//! Root layout computation for filter panel + results + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the filter panel when it sits beside the results.
pub const FILTER_PANEL_WIDTH: u16 = 32;
/// Height of the filter panel when stacked above the results.
pub const FILTER_PANEL_HEIGHT: u16 = 5;
/// Stack the filter panel above the results below this terminal width.
pub const STACK_THRESHOLD: u16 = 80;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Filter form area.
    pub filter: Rect,
    /// Result cards area.
    pub results: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

/// Where the filter panel is placed for the current terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPlacement {
    Side,
    Top,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect) -> (Self, FilterPlacement) {
        let placement = if area.width < STACK_THRESHOLD {
            FilterPlacement::Top
        } else {
            FilterPlacement::Side
        };

        let rows = Layout::vertical([
            Constraint::Min(1),    // Content (filter + results)
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let content_area = rows[0];
        let status = rows[1];

        let (filter, results) = match placement {
            FilterPlacement::Side => {
                let cols = Layout::horizontal([
                    Constraint::Length(FILTER_PANEL_WIDTH),
                    Constraint::Min(1),
                ])
                .split(content_area);
                (cols[0], cols[1])
            }
            FilterPlacement::Top => {
                let rows = Layout::vertical([
                    Constraint::Length(FILTER_PANEL_HEIGHT),
                    Constraint::Min(1),
                ])
                .split(content_area);
                (rows[0], rows[1])
            }
        };

        (AppLayout { filter, results, status }, placement)
    }
}

/// A rect of at most `width` x `height` centered in `area`.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
