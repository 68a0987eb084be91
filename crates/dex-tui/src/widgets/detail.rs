//! Detail pane: everything the catalog knows about the selected hit.

use crate::theme::Theme;
use crate::widgets::results::format_strength;
use dex_core::{search::Hit, SortMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct DetailPane<'a> {
    hits: &'a [Hit<'a>],
    selected: usize,
    mode: SortMode,
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    pub fn new(hits: &'a [Hit<'a>], selected: usize, mode: SortMode, theme: &'a Theme) -> Self {
        Self { hits, selected, mode, theme }
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Details")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(hit) = self.hits.get(self.selected) else {
            return;
        };
        let entity = hit.entity;
        let label = Style::default().add_modifier(Modifier::DIM);

        let mut tags: Vec<Span> = vec![Span::styled("Types  ", label)];
        if entity.tags.is_empty() {
            tags.push(Span::raw("–"));
        }
        for tag in &entity.tags {
            tags.push(Span::styled(format!(" {tag} "), self.theme.tag_style(tag)));
            tags.push(Span::raw(" "));
        }

        let image = if entity.image.is_empty() { "–" } else { entity.image.as_str() };

        let lines = vec![
            Line::from(Span::styled(entity.name.as_str(), self.theme.result_name)),
            Line::default(),
            Line::from(tags),
            Line::from(vec![
                Span::styled("Max    ", label),
                Span::styled(format_strength(entity.strength), self.theme.result_strength),
            ]),
            Line::from(vec![Span::styled("Image  ", label), Span::raw(image)]),
            Line::default(),
            Line::from(vec![
                Span::styled("Rank   ", label),
                Span::raw(format!(
                    "{} of {} ({})",
                    self.selected + 1,
                    self.hits.len(),
                    self.mode
                )),
            ]),
        ];

        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::{search_highlighted, Entity};

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| (area.x..area.right()).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_selected_hit() {
        let catalog = vec![
            Entity::new("Pikachu")
                .with_tags(["Electric"])
                .with_strength(1000.0)
                .with_image("pikachu.png"),
            Entity::new("Raichu").with_tags(["Electric"]).with_strength(1200.0),
        ];
        let hits = search_highlighted(&catalog, "chu", SortMode::Strength);
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        DetailPane::new(&hits, 1, SortMode::Strength, &theme).render(area, &mut buf);
        let text = text(&buf);
        assert!(text.contains("Pikachu"), "{text}");
        assert!(text.contains("CP 1000"), "{text}");
        assert!(text.contains("pikachu.png"), "{text}");
        assert!(text.contains("2 of 2 (strength)"), "{text}");
    }

    #[test]
    fn empty_when_nothing_selected() {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        DetailPane::new(&[], 0, SortMode::Alphabetical, &theme).render(area, &mut buf);
        let text = text(&buf);
        assert!(!text.contains("Rank"), "{text}");
    }
}
