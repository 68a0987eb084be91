//! Key handling for dex: crossterm input becomes [`AppEvent`]s, and the
//! navigation-mode bindings come from the `[keybindings]` config section.
//!
//! # Usage
//!
//! Build a [`Keymap`] from the `[keybindings]` config section once at
//! startup. In the main event loop, call [`Keymap::to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`].
//!
//! # Default keybindings (navigation mode)
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `QueryFocus`               |
//! | `s`                     | `ToggleStrength`           |
//! | `?`                     | `Help`                     |
//! | `:`                     | `Command`                  |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! The first six rows come from the config file; the rest are fixed.
//!
//! ## Insert mode
//!
//! While the query bar or the command bar has focus, [`to_app_event_insert`]
//! is used instead, and:
//! - every printable character produces `Char`, including configured keys
//! - arrow keys still produce `Nav` for cursor movement
//! - `Ctrl+s` toggles strength ranking, `Ctrl+u` clears the input
//! - `Ctrl+c`, `Escape`, `Enter`, `Tab` and `Backspace` keep their bindings

use anyhow::{anyhow, Context};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use dex_core::config::KeybindingsConfig;

/// Cardinal direction for result-list and text-cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press means to dex, independent of the key that produced it.
///
/// `App` routes these to panes by focus; widgets never see crossterm types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Cycle focus between the query bar and the results.
    FocusNext,
    /// Jump back to the query bar.
    QueryFocus,
    /// Flip between alphabetical and strength ranking.
    ToggleStrength,
    /// Toggle the help popup.
    Help,
    /// Open the `:` command bar.
    Command,
    /// Move the result selection or the text cursor.
    Nav(Direction),
    /// Typed text.
    Char(char),
    /// Delete left of the cursor.
    Backspace,
    /// Empty the active text input.
    ClearInput,
    /// Confirm the active input.
    Enter,
    /// New terminal size as (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (query bar focus, help popup, command bar).
    Escape,
}

/// Navigation-mode key bindings resolved from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub toggle_focus: KeyCode,
    pub query_focus: KeyCode,
    pub toggle_strength: KeyCode,
    pub help: KeyCode,
    pub command: KeyCode,
    pub quit: KeyCode,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            toggle_focus: KeyCode::Tab,
            query_focus: KeyCode::Char('/'),
            toggle_strength: KeyCode::Char('s'),
            help: KeyCode::Char('?'),
            command: KeyCode::Char(':'),
            quit: KeyCode::Char('q'),
        }
    }
}

impl Keymap {
    /// Resolve every binding, failing on the first key name that cannot be
    /// parsed.
    pub fn from_config(cfg: &KeybindingsConfig) -> anyhow::Result<Self> {
        let resolve = |field: &str, name: &str| {
            parse_key(name)
                .ok_or_else(|| anyhow!("unknown key name {name:?}"))
                .with_context(|| format!("keybindings.{field}"))
        };
        Ok(Self {
            toggle_focus: resolve("toggle_focus", &cfg.toggle_focus)?,
            query_focus: resolve("query_focus", &cfg.query_focus)?,
            toggle_strength: resolve("toggle_strength", &cfg.toggle_strength)?,
            help: resolve("help", &cfg.help)?,
            command: resolve("command", &cfg.command)?,
            quit: resolve("quit", &cfg.quit)?,
        })
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
    ///
    /// Returns `None` for events that carry no meaning for the application
    /// (mouse events, unbound keys).
    pub fn to_app_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => self.map_key(key),
            _ => None,
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<AppEvent> {
        use KeyCode::*;
        use KeyModifiers as Mod;

        // Ctrl+c quits from anywhere
        if key.code == Char('c') && key.modifiers == Mod::CONTROL {
            return Some(AppEvent::Quit);
        }

        // Shifted symbols ('?', ':') arrive with SHIFT on some terminals
        let plain = key.modifiers == Mod::NONE
            || (matches!(key.code, Char(_)) && key.modifiers == Mod::SHIFT);

        if plain {
            let bound = [
                (self.quit, AppEvent::Quit),
                (self.toggle_focus, AppEvent::FocusNext),
                (self.query_focus, AppEvent::QueryFocus),
                (self.toggle_strength, AppEvent::ToggleStrength),
                (self.help, AppEvent::Help),
                (self.command, AppEvent::Command),
            ];
            if let Some((_, ev)) = bound.into_iter().find(|(code, _)| *code == key.code) {
                return Some(ev);
            }
        }

        match key.code {
            Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
            Down | Char('j') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Down))
            }
            Left | Char('h') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Left))
            }
            Right | Char('l') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Right))
            }

            // Printable characters start a new search from the results pane
            Char(c) if plain => Some(AppEvent::Char(c)),

            Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
            Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
            Esc => Some(AppEvent::Escape),

            _ => None,
        }
    }
}

/// Insert-mode mapping, used while a text input has focus. Letters are
/// always text here, whatever the keymap binds them to.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Quits even mid-query
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('s') if key.modifiers == Mod::CONTROL => Some(AppEvent::ToggleStrength),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ClearInput),

        // Arrow keys move the text cursor / result selection
        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        // Tab leaves the input for the results
        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

/// Parse a key name from the config file.
///
/// Accepts a single character (`"s"`, `"?"`), a function key (`"F1"`–`"F12"`)
/// or one of the named keys below, case-insensitively.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.trim().to_ascii_lowercase();
    match lower.as_str() {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "backspace" => Some(KeyCode::Backspace),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        f if f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => Some(KeyCode::F(n)),
            _ => None,
        },
        _ => None,
    }
}

/// Human-readable name of a bound key, for help text and hints.
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
