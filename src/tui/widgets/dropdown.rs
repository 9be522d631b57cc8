//! Cycling single-choice selector populated from an id → name table.
//!
//! The first option is always "Any". Options keep the table's order.

use indexmap::IndexMap;
use ratatui::text::{Line, Span};

use crate::core::catalog::Choice;
use crate::tui::theme::Palette;

#[derive(Debug, Clone)]
pub struct Dropdown {
    options: Vec<(Choice, String)>,
    selected: usize,
}

impl Dropdown {
    pub fn new(table: &IndexMap<String, String>) -> Self {
        let options = std::iter::once((Choice::Any, "Any".to_string()))
            .chain(
                table
                    .iter()
                    .map(|(id, name)| (Choice::Id(id.clone()), name.clone())),
            )
            .collect();
        Self {
            options,
            selected: 0,
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Select the option for `choice`. Returns `false` if it is not offered.
    pub fn select(&mut self, choice: &Choice) -> bool {
        match self.options.iter().position(|(c, _)| c == choice) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn choice(&self) -> Choice {
        self.options[self.selected].0.clone()
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected].1
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn render_line(&self, label: &str, palette: &Palette, focused: bool) -> Line<'static> {
        let (label_style, value_style) = if focused {
            (palette.highlight(), palette.highlight())
        } else {
            (palette.muted(), palette.text())
        };
        let (open, close) = if focused { ("◂ ", " ▸") } else { ("", "") };
        Line::from(vec![
            Span::styled(format!(" {label}: "), label_style),
            Span::styled(open, palette.muted()),
            Span::styled(self.selected_label().to_string(), value_style),
            Span::styled(close, palette.muted()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres() -> IndexMap<String, String> {
        [("sf", "Science Fiction"), ("mystery", "Mystery")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_any_is_first_and_default() {
        let dd = Dropdown::new(&genres());
        assert_eq!(dd.len(), 3);
        assert_eq!(dd.choice(), Choice::Any);
        assert_eq!(dd.selected_label(), "Any");
    }

    #[test]
    fn test_cycles_in_table_order() {
        let mut dd = Dropdown::new(&genres());
        dd.next();
        assert_eq!(dd.choice(), Choice::Id("sf".into()));
        dd.next();
        assert_eq!(dd.selected_label(), "Mystery");
        dd.next();
        assert_eq!(dd.choice(), Choice::Any);
        dd.prev();
        assert_eq!(dd.choice(), Choice::Id("mystery".into()));
    }

    #[test]
    fn test_select_and_reset() {
        let mut dd = Dropdown::new(&genres());
        assert!(dd.select(&Choice::Id("mystery".into())));
        assert_eq!(dd.selected_label(), "Mystery");
        assert!(!dd.select(&Choice::Id("poetry".into())));
        assert_eq!(dd.selected_label(), "Mystery");
        dd.reset();
        assert_eq!(dd.choice(), Choice::Any);
    }

    #[test]
    fn test_empty_table_offers_only_any() {
        let mut dd = Dropdown::new(&IndexMap::new());
        dd.next();
        assert_eq!(dd.choice(), Choice::Any);
    }
}
