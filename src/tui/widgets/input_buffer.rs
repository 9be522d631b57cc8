//! Single-line text input with a byte cursor kept on char boundaries.
//!
//! Backs the title field of the filter form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::theme::Palette;

#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        let c = self.content[self.cursor..].chars().next()?;
        Some(self.cursor + c.len_utf8())
    }

    /// Render as `label: text` with a block cursor when focused.
    pub fn render_line(&self, label: &str, placeholder: &str, palette: &Palette, focused: bool) -> Line<'static> {
        let label_style = if focused { palette.highlight() } else { palette.muted() };
        let mut spans = vec![Span::styled(format!(" {label}: "), label_style)];

        if self.content.is_empty() && !focused {
            spans.push(Span::styled(placeholder.to_string(), palette.muted()));
            return Line::from(spans);
        }

        if focused {
            let (before, after) = self.content.split_at(self.cursor);
            let mut rest = after.chars();
            let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
            spans.push(Span::styled(before.to_string(), palette.text()));
            spans.push(Span::styled(
                under,
                palette.text().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(rest.as_str().to_string(), palette.text()));
        } else {
            spans.push(Span::styled(self.content.clone(), Style::default().fg(palette.text)));
        }
        Line::from(spans)
    }
}
