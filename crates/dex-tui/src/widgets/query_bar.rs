//! Query bar widget: text input + "max CP" checkbox at the top of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `ClearInput` (`Ctrl+u`) empties the input.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! The checkbox only mirrors the session's sort mode; toggling it is handled
//! by the app shell so it works from every pane.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const PLACEHOLDER: &str = "creature or type";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The text typed by the user.
    pub input: String,
    /// Byte index into `input`, always on a char boundary.
    pub cursor: usize,
}

impl QueryBarState {
    /// Start with `input` already typed and the cursor at its end.
    pub fn with_input(input: impl Into<String>) -> Self {
        let input = input.into();
        let cursor = input.len();
        Self { input, cursor }
    }

    /// Apply an edit; returns whether `input` changed.
    ///
    /// Returns `true` when the text changed, so the caller knows to push
    /// the new query into the session. Cursor moves return `false`.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(input = %self.input, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                // Walk back one char boundary
                let prev = self.input[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.input.remove(prev);
                self.cursor = prev;
                tracing::debug!(input = %self.input, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::ClearInput => {
                if self.input.is_empty() {
                    return false;
                }
                self.input.clear();
                self.cursor = 0;
                tracing::debug!("query: cleared");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.input[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    tracing::debug!(cursor = self.cursor, "query: cursor left");
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                    tracing::debug!(cursor = self.cursor, "query: cursor right");
                }
                false
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    by_strength: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, by_strength: bool, focused: bool, theme: &'a Theme) -> Self {
        Self { state, by_strength, focused, theme }
    }

    /// Where the caret goes once this bar is drawn into `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Inside the border
        let col = self.state.input[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Search").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: query text (fill) | checkbox (fixed width)
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(12)])
            .split(inner);

        let query_line = if self.state.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.input.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let mark = if self.by_strength { "x" } else { " " };
        Paragraph::new(Line::from(format!("[{mark}] max CP"))).render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(text: &str) -> QueryBarState {
        let mut s = QueryBarState::default();
        for c in text.chars() {
            assert!(s.handle(&AppEvent::Char(c)));
        }
        s
    }

    #[test]
    fn typing_and_backspace() {
        let mut s = typed("chu");
        assert_eq!(s.input, "chu");
        assert_eq!(s.cursor, 3);
        assert!(s.handle(&AppEvent::Backspace));
        assert_eq!(s.input, "ch");
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn backspace_at_start_changes_nothing() {
        let mut s = QueryBarState::default();
        assert!(!s.handle(&AppEvent::Backspace));
        assert_eq!(s.input, "");
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut s = typed("bé");
        assert!(!s.handle(&AppEvent::Nav(Direction::Left)));
        assert_eq!(s.cursor, 1);
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.input, "bxé");
        s.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(s.cursor, s.input.len());
    }

    #[test]
    fn clear_input() {
        let mut s = typed("pika");
        assert!(s.handle(&AppEvent::ClearInput));
        assert_eq!(s.input, "");
        assert_eq!(s.cursor, 0);
        assert!(!s.handle(&AppEvent::ClearInput));
    }

    #[test]
    fn renders_checkbox_state() {
        let theme = Theme::load_default();
        let state = QueryBarState::with_input("chu");
        let area = Rect::new(0, 0, 40, 3);

        let mut buf = Buffer::empty(area);
        QueryBar::new(&state, true, true, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains("chu"), "{row:?}");
        assert!(row.contains("[x] max CP"), "{row:?}");

        let mut buf = Buffer::empty(area);
        QueryBar::new(&state, false, true, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains("[ ] max CP"), "{row:?}");
    }

    #[test]
    fn placeholder_when_empty_and_unfocused() {
        let theme = Theme::load_default();
        let state = QueryBarState::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        QueryBar::new(&state, false, false, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains(PLACEHOLDER), "{row:?}");
    }
}
