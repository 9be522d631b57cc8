//! Catalog browser view: filter form, result cards and the detail dialog.
//!
//! The view is the session's [`Renderer`]: it keeps the last card slice it
//! was handed and draws from that. Key handling never touches the session
//! directly; anything that changes browsing state comes back as an
//! [`Action`] for the app to apply.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::catalog::{BookCard, BookDetail, Catalog, FilterCriteria, Renderer};
use crate::tui::events::{Action, Focus};
use crate::tui::layout::{centered_fixed, AppLayout};
use crate::tui::theme::Palette;
use crate::tui::widgets::{Dropdown, InputBuffer};

/// Rows each card takes in the result list.
const CARD_HEIGHT: usize = 3;

/// Outcome of routing a key to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserResult {
    /// Handled locally (cursor moved, text typed).
    Consumed,
    /// The app must apply this action.
    Action(Action),
}

/// What the session last pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Shown {
    #[default]
    Nothing,
    Cards(Vec<BookCard>),
    Empty,
}

pub struct BrowserState {
    focus: Focus,
    title: InputBuffer,
    author: Dropdown,
    genre: Dropdown,
    shown: Shown,
    highlighted: usize,
}

impl BrowserState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            focus: Focus::Results,
            title: InputBuffer::new(),
            author: Dropdown::new(catalog.authors()),
            genre: Dropdown::new(catalog.genres()),
            shown: Shown::Nothing,
            highlighted: 0,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The form's current values as filter criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.title.text(), self.author.choice(), self.genre.choice())
    }

    /// Clear the form back to "any".
    pub fn reset_form(&mut self) {
        self.title.clear();
        self.author.reset();
        self.genre.reset();
    }

    /// Move the highlight back to the first card.
    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
    }

    pub fn cards(&self) -> &[BookCard] {
        match &self.shown {
            Shown::Cards(cards) => cards,
            Shown::Nothing | Shown::Empty => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        self.shown == Shown::Empty
    }

    pub fn highlighted_card(&self) -> Option<&BookCard> {
        self.cards().get(self.highlighted)
    }

    // ── Input ────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event) -> Option<BrowserResult> {
        if let Event::Mouse(mouse) = event {
            return self.handle_mouse(mouse.kind);
        }

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match self.focus {
            Focus::Results => self.handle_results_input(*code, *modifiers),
            Focus::Title => Some(self.handle_title_input(*code)),
            Focus::Author | Focus::Genre => Some(self.handle_dropdown_input(*code)),
        }
    }

    fn handle_results_input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<BrowserResult> {
        let result = match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.move_highlight(1);
                BrowserResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.highlighted = self.highlighted.saturating_sub(1);
                BrowserResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => {
                self.highlighted = 0;
                BrowserResult::Consumed
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
                self.highlighted = self.cards().len().saturating_sub(1);
                BrowserResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Enter) => match self.highlighted_card() {
                Some(card) => BrowserResult::Action(Action::SelectBook(card.id.clone())),
                None => BrowserResult::Consumed,
            },
            (KeyModifiers::NONE, KeyCode::Char('m') | KeyCode::Char(' ')) => {
                BrowserResult::Action(Action::LoadMore)
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => BrowserResult::Action(Action::ResetFilter),
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                self.focus = Focus::Title;
                BrowserResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                self.focus = self.focus.next();
                BrowserResult::Consumed
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                self.focus = self.focus.prev();
                BrowserResult::Consumed
            }
            _ => return None,
        };
        Some(result)
    }

    fn handle_mouse(&mut self, kind: MouseEventKind) -> Option<BrowserResult> {
        match kind {
            MouseEventKind::ScrollDown => self.move_highlight(1),
            MouseEventKind::ScrollUp => self.highlighted = self.highlighted.saturating_sub(1),
            _ => return None,
        }
        Some(BrowserResult::Consumed)
    }

    /// Keys shared by every form field.
    fn handle_form_nav(&mut self, code: KeyCode) -> Option<BrowserResult> {
        match code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Esc => self.focus = Focus::Results,
            KeyCode::Enter => {
                self.focus = Focus::Results;
                return Some(BrowserResult::Action(Action::SubmitFilter));
            }
            _ => return None,
        }
        Some(BrowserResult::Consumed)
    }

    fn handle_title_input(&mut self, code: KeyCode) -> BrowserResult {
        if let Some(result) = self.handle_form_nav(code) {
            return result;
        }
        match code {
            KeyCode::Char(c) => self.title.insert_char(c),
            KeyCode::Backspace => self.title.backspace(),
            KeyCode::Delete => self.title.delete(),
            KeyCode::Left => self.title.move_left(),
            KeyCode::Right => self.title.move_right(),
            KeyCode::Home => self.title.move_home(),
            KeyCode::End => self.title.move_end(),
            _ => {}
        }
        // Consume to avoid pass-through
        BrowserResult::Consumed
    }

    fn handle_dropdown_input(&mut self, code: KeyCode) -> BrowserResult {
        if let Some(result) = self.handle_form_nav(code) {
            return result;
        }
        let dropdown = match self.focus {
            Focus::Author => &mut self.author,
            _ => &mut self.genre,
        };
        match code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => dropdown.next(),
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => dropdown.prev(),
            KeyCode::Backspace | KeyCode::Delete => dropdown.reset(),
            _ => {}
        }
        BrowserResult::Consumed
    }

    fn move_highlight(&mut self, by: usize) {
        let last = self.cards().len().saturating_sub(1);
        self.highlighted = self.highlighted.saturating_add(by).min(last);
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, layout: &AppLayout, palette: &Palette) {
        self.render_filter_panel(frame, layout.filter, palette);
        self.render_results(frame, layout.results, palette);
    }

    fn render_filter_panel(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = palette.block("Filter", self.focus.is_form());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            self.title
                .render_line("Title", "any title", palette, self.focus == Focus::Title),
            self.author
                .render_line("Author", palette, self.focus == Focus::Author),
            self.genre
                .render_line("Genre", palette, self.focus == Focus::Genre),
        ];
        if inner.height > 4 {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled(" Enter", palette.key_hint()),
                Span::raw(":apply "),
                Span::styled("Tab", palette.key_hint()),
                Span::raw(":next "),
                Span::styled("Esc", palette.key_hint()),
                Span::raw(":results"),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = palette.block("Books", self.focus == Focus::Results);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cards = match &self.shown {
            Shown::Cards(cards) => cards,
            Shown::Nothing => return,
            Shown::Empty => {
                let empty = Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled("No books match these filters.", palette.muted())),
                    Line::from(vec![
                        Span::styled("r", palette.key_hint()),
                        Span::raw(" to reset, "),
                        Span::styled("/", palette.key_hint()),
                        Span::raw(" to edit"),
                    ]),
                ])
                .alignment(Alignment::Center);
                frame.render_widget(empty, inner);
                return;
            }
        };

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(cards.len() * CARD_HEIGHT);
        for (i, card) in cards.iter().enumerate() {
            let selected = i == self.highlighted;
            let (pointer, title_style) = if selected {
                (" \u{25b8} ", palette.highlight())
            } else {
                ("   ", palette.text())
            };
            lines.push(Line::from(vec![
                Span::styled(pointer, palette.highlight()),
                Span::styled(card.title.clone(), title_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(format!("by {}", card.author), palette.muted()),
            ]));
            let image = if card.image.is_empty() {
                "no cover".to_string()
            } else {
                card.image.clone()
            };
            lines.push(Line::from(Span::styled(format!("   {image}"), palette.key_hint())));
        }

        let scroll = scroll_offset(self.highlighted, inner.height as usize);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
    }

    /// Centered modal with the full record.
    pub fn render_detail(&self, frame: &mut Frame, area: Rect, detail: &BookDetail, palette: &Palette) {
        let modal = centered_fixed(64, 16, area);
        let record = &detail.record;

        let block = Block::default()
            .title(format!(" {} ", record.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(palette.title())
            .style(palette.surface());
        let inner = block.inner(modal);
        frame.render_widget(Clear, modal);
        frame.render_widget(block, modal);

        let rows = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {label:<10}"), palette.heading()),
                Span::styled(value, palette.text()),
            ])
        };
        let genres = if detail.genres.is_empty() {
            "none".to_string()
        } else {
            detail.genres.join(", ")
        };
        let facts = vec![
            field("Author", detail.author.clone()),
            field("Genres", genres),
            field("Published", record.published_date.format("%Y-%m-%d").to_string()),
            field("Cover", record.image.clone()),
            field("Id", record.id.clone()),
        ];
        frame.render_widget(Paragraph::new(facts), rows[0]);

        let description = if record.description.is_empty() {
            Line::from(Span::styled(" No description.", palette.muted()))
        } else {
            Line::from(format!(" {}", record.description))
        };
        frame.render_widget(
            Paragraph::new(description).wrap(Wrap { trim: true }),
            rows[1],
        );

        let footer = Line::from(vec![
            Span::styled(" Esc", palette.key_hint()),
            Span::raw(" close"),
        ]);
        frame.render_widget(Paragraph::new(footer), rows[2]);
    }
}

impl Renderer for BrowserState {
    fn render(&mut self, cards: &[BookCard]) {
        self.highlighted = self.highlighted.min(cards.len().saturating_sub(1));
        self.shown = Shown::Cards(cards.to_vec());
    }

    fn render_empty(&mut self) {
        self.highlighted = 0;
        self.shown = Shown::Empty;
    }
}

/// First row to draw so the highlighted card stays fully visible.
fn scroll_offset(highlighted: usize, height: usize) -> u16 {
    let card_bottom = (highlighted + 1) * CARD_HEIGHT;
    let offset = card_bottom.saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
