/// Everything the browser loop reacts to.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Key or mouse event from crossterm.
    Input(crossterm::event::Event),
    /// Input already mapped to an [`Action`].
    Action(Action),
    /// Status message for the bottom-right overlay.
    Notification(Notification),
    Quit,
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Catalog
    SubmitFilter,
    ResetFilter,
    LoadMore,
    SelectBook(String),
    DismissDetail,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    ToggleTheme,
    Quit,
}

/// Which part of the browser receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Results,
    Title,
    Author,
    Genre,
}

impl Focus {
    pub const ALL: [Focus; 4] = [Focus::Results, Focus::Title, Focus::Author, Focus::Genre];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Results => "Results",
            Focus::Title => "Title",
            Focus::Author => "Author",
            Focus::Genre => "Genre",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }

    pub fn is_form(self) -> bool {
        self != Focus::Results
    }
}

/// Severity; picks the overlay color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Status message that expires after `ttl_ticks`.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    pub ttl_ticks: u32,
}
