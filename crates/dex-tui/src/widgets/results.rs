//! Results pane: the suggestion list under the query bar.
//!
//! Renders one of the four [`View`] states: a loading placeholder, an idle
//! prompt, the "No results" card, or up to four hits. Each hit takes two
//! rows: the highlighted name with its strength, then its tag badges.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select previous hit |
//! | `↓` / `j` | Select next hit |

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use dex_core::{search::Hit, View};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultsState {
    /// Index of the selected hit.
    pub selected: usize,
    /// Hit count at the last render, so `handle()` can clamp.
    last_len: Cell<usize>,
}

impl ResultsState {
    /// Selected index clamped to `len` hits.
    pub fn selected_in(&self, len: usize) -> usize {
        self.selected.min(len.saturating_sub(1))
    }

    /// Back to the first hit; called whenever the result set changes.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let len = self.last_len.get();
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected_in(len).saturating_sub(1);
                tracing::debug!(selected = self.selected, "results: up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                tracing::debug!(selected = self.selected, "results: down");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    view: &'a View<'a>,
    state: &'a ResultsState,
    focused: bool,
    show_strength: bool,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    pub fn new(
        view: &'a View<'a>,
        state: &'a ResultsState,
        focused: bool,
        show_strength: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { view, state, focused, show_strength, theme }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Results").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let hits = self.view.hits();
        self.state.last_len.set(hits.len());

        let message = |text: &'static str, style: Style| {
            Paragraph::new(Line::from(Span::styled(text, style)))
                .alignment(Alignment::Center)
        };

        match self.view {
            View::Loading => {
                message("Loading catalog…", self.theme.loading).render(inner, buf);
            }
            View::Idle => {
                message(
                    "Type a creature name or type to search",
                    Style::default().add_modifier(Modifier::DIM),
                )
                .render(inner, buf);
            }
            View::NoResults => {
                message("No results", self.theme.no_results).render(inner, buf);
            }
            View::Results(hits) => {
                let selected = self.state.selected_in(hits.len());
                let lines: Vec<Line<'_>> = hits
                    .iter()
                    .enumerate()
                    .flat_map(|(i, hit)| {
                        hit_lines(hit, i == selected, self.focused, self.show_strength, self.theme)
                    })
                    .collect();
                Paragraph::new(lines).render(inner, buf);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hit rendering
// ---------------------------------------------------------------------------

fn hit_lines<'h>(
    hit: &Hit<'h>,
    selected: bool,
    focused: bool,
    show_strength: bool,
    theme: &Theme,
) -> [Line<'h>; 2] {
    let marker = if selected { "▶ " } else { "  " };

    let mut name: Vec<Span<'h>> = vec![Span::raw(marker)];
    name.extend(hit.segments.iter().map(|seg| {
        let style = if seg.is_match {
            theme.result_name.patch(theme.search_highlight)
        } else {
            theme.result_name
        };
        Span::styled(seg.text, style)
    }));
    if show_strength {
        name.push(Span::raw("  "));
        name.push(Span::styled(
            format_strength(hit.entity.strength),
            theme.result_strength,
        ));
    }

    let mut tags: Vec<Span<'h>> = vec![Span::raw("    ")];
    for tag in &hit.entity.tags {
        tags.push(Span::styled(format!(" {tag} "), theme.tag_style(tag)));
        tags.push(Span::raw(" "));
    }

    let mut name = Line::from(name);
    if selected && focused {
        name = name.patch_style(Style::default().add_modifier(Modifier::REVERSED));
    }
    [name, Line::from(tags)]
}

/// `CP 1200`, or `CP –` when the catalog had no value.
pub fn format_strength(strength: Option<f64>) -> String {
    match strength {
        Some(cp) => format!("CP {cp}"),
        None => "CP –".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::{Entity, Session};
    use pretty_assertions::assert_eq;

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| (area.x..area.right()).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn render(session: &Session, state: &ResultsState) -> Buffer {
        let theme = Theme::load_default();
        let view = session.view();
        let area = Rect::new(0, 0, 48, 12);
        let mut buf = Buffer::empty(area);
        ResultsList::new(&view, state, true, true, &theme).render(area, &mut buf);
        buf
    }

    fn session() -> Session {
        Session::with_catalog(vec![
            Entity::new("Pikachu").with_tags(["Electric"]).with_strength(1000.0),
            Entity::new("Raichu").with_tags(["Electric"]).with_strength(1200.0),
            Entity::new("Ditto").with_tags(["Normal"]),
        ])
    }

    #[test]
    fn loading_and_no_results_are_distinct() {
        let state = ResultsState::default();
        let loading = rows(&render(&Session::new(), &state)).join("\n");
        assert!(loading.contains("Loading catalog"), "{loading}");

        let mut s = session();
        s.set_query("zz");
        let empty = rows(&render(&s, &state)).join("\n");
        assert!(empty.contains("No results"), "{empty}");
        assert!(!empty.contains("Loading"), "{empty}");
    }

    #[test]
    fn hits_show_name_strength_and_tags() {
        let mut s = session();
        s.set_query("chu");
        let text = rows(&render(&s, &ResultsState::default()));
        assert!(text[1].contains("Pikachu") && text[1].contains("CP 1000"), "{text:?}");
        assert!(text[2].contains("Electric"), "{text:?}");
        assert!(text[3].contains("Raichu") && text[3].contains("CP 1200"), "{text:?}");
    }

    #[test]
    fn matched_segment_gets_highlight_style() {
        let mut s = session();
        s.set_query("chu");
        let theme = Theme::load_default();
        let buf = render(&s, &ResultsState::default());
        // row 1: border, "▶ ", "Pika" then "chu"
        let chu_x = 1 + 2 + 4;
        assert_eq!(buf[(chu_x, 1)].symbol(), "c");
        assert_eq!(buf[(chu_x, 1)].bg, theme.search_highlight.bg.unwrap());
        assert_ne!(buf[(chu_x - 1, 1)].bg, theme.search_highlight.bg.unwrap());
    }

    #[test]
    fn selection_is_clamped_to_rendered_hits() {
        let mut s = session();
        s.set_query("chu");
        let mut state = ResultsState::default();
        let _ = render(&s, &state);
        state.handle(&AppEvent::Nav(Direction::Down));
        state.handle(&AppEvent::Nav(Direction::Down));
        state.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(state.selected, 1);
        state.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(state.selected, 0);
        state.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn strength_formatting() {
        assert_eq!(format_strength(Some(1200.0)), "CP 1200");
        assert_eq!(format_strength(Some(12.5)), "CP 12.5");
        assert_eq!(format_strength(None), "CP –");
    }
}
