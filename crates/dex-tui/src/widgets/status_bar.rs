//! One-line status bar at the bottom of the screen.
//!
//! Left: catalog state. Middle: active sort mode. Right: key hints built from
//! the configured keymap.

use crate::event::{key_label, Keymap};
use crate::theme::Theme;
use dex_core::SortMode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// What the bar says about the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus<'a> {
    Loading { source: &'a str },
    Loaded { count: usize },
}

pub struct StatusBar<'a> {
    catalog: CatalogStatus<'a>,
    mode: SortMode,
    keymap: &'a Keymap,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(catalog: CatalogStatus<'a>, mode: SortMode, keymap: &'a Keymap, theme: &'a Theme) -> Self {
        Self { catalog, mode, keymap, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let catalog = match self.catalog {
            CatalogStatus::Loading { source } => {
                Span::styled(format!("loading {source}…"), self.theme.loading)
            }
            CatalogStatus::Loaded { count } => Span::raw(format!("{count} creatures")),
        };

        let left = Line::from(vec![
            Span::styled(" dex", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" │ "),
            catalog,
            Span::raw(" │ "),
            Span::raw(format!("sort: {}", self.mode)),
        ]);
        Paragraph::new(left).render(area, buf);

        let k = self.keymap;
        let hints = format!(
            "{} max CP  {} focus  {} help  {} quit ",
            key_label(k.toggle_strength),
            key_label(k.toggle_focus),
            key_label(k.help),
            key_label(k.quit),
        );
        Paragraph::new(Span::styled(hints, Style::default().add_modifier(Modifier::DIM)))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: CatalogStatus<'_>, mode: SortMode) -> String {
        let theme = Theme::load_default();
        let keymap = Keymap::default();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(status, mode, &keymap, &theme).render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn loaded_catalog_and_mode() {
        let row = row(CatalogStatus::Loaded { count: 151 }, SortMode::Strength);
        assert!(row.contains("151 creatures"), "{row}");
        assert!(row.contains("sort: strength"), "{row}");
        assert!(row.contains("Tab focus"), "{row}");
    }

    #[test]
    fn loading_shows_source() {
        let row = row(CatalogStatus::Loading { source: "pokemon.json" }, SortMode::Alphabetical);
        assert!(row.contains("loading pokemon.json…"), "{row}");
        assert!(row.contains("sort: alphabetical"), "{row}");
    }
}
