use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Notification, NotificationLevel};
use super::layout::{centered_fixed, AppLayout};
use super::theme::{self, Palette, ThemeMode};
use super::views::browser::{BrowserResult, BrowserState};
use crate::core::catalog::{CatalogError, FilterCriteria, Session};

/// Ticks a notification stays on screen.
const NOTIFICATION_TTL: u32 = 100;

/// Browser application state, updated only from the event loop.
pub struct AppState {
    pub running: bool,
    /// Browsing state: match set, cursor, detail dialog.
    pub session: Session,
    /// Filter form and card list; the session renders into it.
    pub browser: BrowserState,
    pub theme: ThemeMode,
    /// Visible status messages, oldest first.
    pub notifications: Vec<Notification>,
    notification_counter: u64,
    pub show_help: bool,
    /// Receiver for internal events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(
        session: Session,
        theme: ThemeMode,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let browser = BrowserState::new(session.catalog());
        Self {
            running: true,
            session,
            browser,
            theme,
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            event_tx,
        }
    }

    /// Show the whole catalog.
    pub fn start(&mut self) {
        if let Err(e) = self.session.start(&mut self.browser) {
            self.report(e);
        }
    }

    /// Handle for pushing events into the loop from elsewhere.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    // ── Loop ────────────────────────────────────────────────────────────

    /// Draw, then wait on the next tick, queued event or terminal input.
    /// Returns once an [`Action::Quit`] has been handled.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        self.start();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Detail dialog
                if self.session.is_detail_open() {
                    if let Some(action) = self.map_detail_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 3: Browser
                match self.browser.handle_input(&crossterm_event) {
                    Some(BrowserResult::Consumed) => return,
                    Some(BrowserResult::Action(action)) => {
                        self.handle_action(action);
                        return;
                    }
                    None => {}
                }

                // Priority 4: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        match press_code(event)? {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_detail_input(&self, event: &Event) -> Option<Action> {
        match press_code(event)? {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::DismissDetail),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('t') => Some(Action::ToggleTheme),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                log::debug!("Theme switched to {}", self.theme.label());
            }
            Action::SubmitFilter => {
                let criteria = self.browser.criteria();
                self.apply_filter(criteria);
            }
            Action::ResetFilter => {
                self.browser.reset_form();
                self.apply_filter(FilterCriteria::any());
            }
            Action::LoadMore => match self.session.load_more(&mut self.browser) {
                Ok(Some(expansion)) => {
                    if let Some(anchor) = expansion.anchor.filter(|_| expansion.appended > 0) {
                        self.push_notification(
                            format!("Added {} related to \"{}\"", expansion.appended, anchor.title),
                            NotificationLevel::Info,
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => self.report(e),
            },
            Action::SelectBook(id) => match self.session.select(&id) {
                Ok(_) => {}
                Err(e) => self.report(e),
            },
            Action::DismissDetail => {
                self.session.dismiss_detail();
            }
        }
    }

    fn apply_filter(&mut self, criteria: FilterCriteria) {
        match self.session.submit_filter(criteria, &mut self.browser) {
            Ok(Some(_)) => self.browser.reset_highlight(),
            Ok(None) => {}
            Err(e) => self.report(e),
        }
    }

    /// Log a catalog error and surface it as a notification.
    fn report(&mut self, error: CatalogError) {
        log::error!("{error}");
        self.push_notification(error.to_string(), NotificationLevel::Error);
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Show `message` unless it is already on screen. Oldest messages drop
    /// off past three.
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }
        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL,
        });
        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let palette = self.theme.palette();
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        let (layout, _) = AppLayout::compute(area);
        self.browser.render(frame, &layout, &palette);
        self.render_status_bar(frame, layout.status, &palette);

        // Overlays
        if let Some(detail) = self.session.detail() {
            self.browser.render_detail(frame, area, detail, &palette);
        }
        self.render_notifications(frame, area);
        if self.show_help {
            self.render_help_modal(frame, area, &palette);
        }
    }

    /// `shown/total` plus the page counter, e.g. `8/16 · p1`.
    fn result_summary(&self) -> String {
        format!(
            "{}/{} · p{}",
            self.session.visible().len(),
            self.session.matches().len(),
            self.session.cursor().pages_revealed()
        )
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let more = if self.session.has_more() {
            Span::styled(" more ", palette.insert_badge())
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" SHELFSCAN ", palette.brand_badge()),
            Span::raw(" "),
            Span::styled(self.browser.focus().label(), palette.heading()),
            Span::raw(" │ "),
            Span::styled(self.result_summary(), palette.text()),
            Span::raw(" "),
            more,
            Span::raw(" │ "),
            Span::styled("/", palette.key_hint()),
            Span::raw(":filter "),
            Span::styled("m", palette.key_hint()),
            Span::raw(":more "),
            Span::styled("Enter", palette.key_hint()),
            Span::raw(":open "),
            Span::styled("t", palette.key_hint()),
            Span::raw(":theme "),
            Span::styled("?", palette.key_hint()),
            Span::raw(":help "),
            Span::styled("q", palette.key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1, max_width, height.min(area.height));

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("t", "Toggle light/dark theme"),
            ("", ""),
            ("Results:", ""),
            ("j/k", "Move highlight"),
            ("g / G", "First / last card"),
            ("Enter", "Open book details"),
            ("m / Space", "Load more (related titles)"),
            ("r", "Reset filter"),
            ("/ or Tab", "Edit filter"),
            ("", ""),
            ("Filter form:", ""),
            ("Tab / Shift+Tab", "Next / previous field"),
            ("←/→", "Cycle author or genre"),
            ("Enter", "Apply filter"),
            ("Esc", "Back to results"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", palette.title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), palette.title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{key:<18}"), palette.heading()),
                    Span::styled(desc, palette.text()),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", palette.heading()),
            Span::raw(" or "),
            Span::styled("Esc", palette.heading()),
            Span::raw(" to close"),
        ]));

        let modal = centered_fixed(56, lines.len() as u16 + 2, area);
        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(palette.title())
            .style(palette.surface());

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Key code of a press event, ignoring repeats/releases and other events.
fn press_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Some(*code),
        _ => None,
    }
}
