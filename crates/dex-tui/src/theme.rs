//! Colour theme for the dex TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] (or [`Theme::load_default`]) at startup and
//! pass the result through the application as a shared reference.
//!
//! # Tag badge colours
//!
//! A theme may name a colour for well-known tags under `[tags.colors]`
//! (`fire = "#f08030"`). Any other tag is hashed to a stable index into
//! `[tags] palette`, so the same tag always gets the same colour regardless
//! of the order tags appear in.

use std::{collections::HashMap, str::FromStr};

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    dim: bool,
    italic: bool,
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let flags = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ];
        let modifiers = flags
            .into_iter()
            .filter(|(on, _)| *on)
            .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        let mut style = Style::default().add_modifier(modifiers);
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    name: RawStyle,
    strength: RawStyle,
    loading: RawStyle,
    no_results: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTags {
    badge_fg: String,
    palette: Vec<String>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    search: RawSearch,
    results: RawResults,
    tags: RawTags,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Resolved colours for every dex pane.
///
/// All styles are pre-resolved ratatui [`Style`] values; no parsing at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border of the pane holding focus.
    pub border_focused: Style,
    /// Border style for the command bar pane.
    pub border_command_bar: Style,
    /// Border of every other pane.
    pub border_unfocused: Style,

    /// Inline highlight applied to matched name segments.
    pub search_highlight: Style,

    /// Unmatched parts of a result name.
    pub result_name: Style,
    /// The `CP 1200` column.
    pub result_strength: Style,
    /// Placeholder shown while the catalog is loading.
    pub loading: Style,
    /// The "No results" state.
    pub no_results: Style,

    tag_badge_fg: Option<Color>,
    tag_palette: Vec<Color>,
    /// Keys are lower-case tag names.
    tag_colors: HashMap<String, Color>,
}

impl Theme {
    /// The built-in `default` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the theme tests rule
    /// out.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// The built-in `gruvbox_dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Look up a built-in theme by the name used in config and `:theme`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Build a theme from TOML source.
    ///
    /// Fails when the TOML does not deserialise into a theme. Unknown keys
    /// are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            result_name: raw.results.name.into_style(),
            result_strength: raw.results.strength.into_style(),
            loading: raw.results.loading.into_style(),
            no_results: raw.results.no_results.into_style(),
            tag_badge_fg: parse_color(&raw.tags.badge_fg),
            tag_palette: raw
                .tags
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
            tag_colors: raw
                .tags
                .colors
                .iter()
                .filter_map(|(tag, c)| Some((tag.to_lowercase(), parse_color(c)?)))
                .collect(),
        })
    }

    /// Badge [`Style`] for a tag: the theme's named colour for that tag if it
    /// has one, otherwise a stable pick from the palette.
    pub fn tag_style(&self, tag: &str) -> Style {
        let key = tag.to_lowercase();
        let bg = match self.tag_colors.get(&key) {
            Some(c) => *c,
            None if self.tag_palette.is_empty() => return Style::default(),
            None => self.tag_palette[stable_hash(&key) % self.tag_palette.len()],
        };
        let style = Style::default().bg(bg);
        match self.tag_badge_fg {
            Some(fg) => style.fg(fg),
            None => style,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic string hash; tag colours must not change between runs.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Accepts whatever [`Color`]'s `FromStr` does (`red`, `dark_gray`,
/// `light-cyan`, `#rrggbb`, a bare 256-colour index) plus `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    Color::from_str(s.strip_prefix("indexed:").unwrap_or(s)).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_loads() {
        let theme = Theme::load_default();
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.search_highlight, Style::default());
        assert_ne!(theme.no_results, Style::default());
        assert!(!theme.tag_palette.is_empty());
        assert!(!theme.tag_colors.is_empty());
    }

    #[test]
    fn gruvbox_dark_theme_loads() {
        let theme = Theme::load_gruvbox_dark();
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.search_highlight, Style::default());
        assert!(!theme.tag_palette.is_empty());
    }

    #[test]
    fn themes_by_name() {
        assert!(Theme::by_name("default").is_some());
        assert!(Theme::by_name("Gruvbox").is_some());
        assert!(Theme::by_name("gruvbox-dark").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn named_tag_colour_wins_and_ignores_case() {
        let theme = Theme::load_default();
        let fire = theme.tag_style("Fire");
        assert_eq!(fire.bg, Some(Color::Rgb(0xf0, 0x80, 0x30)));
        assert_eq!(theme.tag_style("FIRE"), fire);
    }

    #[test]
    fn unknown_tag_style_is_stable() {
        let theme = Theme::load_default();
        let a = theme.tag_style("Cosmic");
        assert_eq!(a, theme.tag_style("cosmic"));
        assert!(a.bg.is_some());
    }

    #[test]
    fn different_unknown_tags_can_differ() {
        let theme = Theme::load_default();
        let styles: Vec<_> = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]
            .iter()
            .map(|n| theme.tag_style(n))
            .collect();
        let unique: std::collections::HashSet<_> = styles.iter().collect();
        assert!(unique.len() > 1, "all tags mapped to the same colour");
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_named_colors_with_separators() {
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("Light-Red"), Some(Color::LightRed));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }
}
