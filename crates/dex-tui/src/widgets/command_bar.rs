//! Vim-style command bar: a single-line overlay at the bottom of the screen.
//!
//! Activated by pressing `:` outside the search bar. Displays a `:` prefix
//! followed by the typed command. `Enter` and `Escape` are handled by the app
//! shell, which parses the input with [`crate::commands::Command::parse`];
//! this state only owns the text being edited and the last error.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// What has been typed after `:`, plus the last failure.
#[derive(Debug, Default)]
pub struct CommandBarState {
    pub input: String,
    /// Byte index into `input`, always on a char boundary.
    pub cursor: usize,
    /// Shown instead of the input until the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Blank slate for a freshly opened bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Apply an editing key.
    pub fn handle(&mut self, event: &AppEvent) {
        // The next key brings the input back
        self.error = None;

        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if let Some((prev, _)) = self.input[..self.cursor].char_indices().last() {
                    self.input.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::ClearInput => {
                self.input.clear();
                self.cursor = 0;
            }
            AppEvent::Nav(Direction::Left) => {
                if let Some((prev, _)) = self.input[..self.cursor].char_indices().last() {
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if let Some(c) = self.input[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            _ => {}
        }
    }

    /// Screen column for the caret; column 0 of `area` holds the `:`.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.input[..self.cursor].chars().count() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// The `:` line drawn over the status bar.
///
/// The caller passes a 1-row `Rect` at the bottom of the terminal.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(
                format!("E  {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled(":", self.theme.border_command_bar.add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.as_str()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
