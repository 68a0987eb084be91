//! Configuration types for dex.
//!
//! Settings live in `$XDG_CONFIG_HOME/dex/config.toml` (normally
//! `~/.config/dex`), layered over the embedded defaults. A first run writes the
//! defaults out so there is a file to edit. [`Config::defaults`] never
//! touches disk.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Dataset the original widget was built around.
pub const DEFAULT_CATALOG_URL: &str = "https://gist.githubusercontent.com/bar0191/fae6084225b608f25e98b733864a102b/raw/dea83ea9cf4a8a6022bfc89a8ae8df5ab05b6dcc/pokemon.json";

const DEFAULT_CONFIG: &str = r#"
[catalog]
source = "https://gist.githubusercontent.com/bar0191/fae6084225b608f25e98b733864a102b/raw/dea83ea9cf4a8a6022bfc89a8ae8df5ab05b6dcc/pokemon.json"

[ui]
theme                 = "default"
show_strength         = true
detail_pane_width_pct = 40

[keybindings]
toggle_focus    = "Tab"
query_focus     = "/"
toggle_strength = "s"
help            = "?"
command         = ":"
quit            = "q"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/dex/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// URL, file path, or `-` for stdin.
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String { DEFAULT_CATALOG_URL.to_string() }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { source: default_source() }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_strength")]
    pub show_strength: bool,
    #[serde(default = "default_detail_pane_width_pct")]
    pub detail_pane_width_pct: u16,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_strength() -> bool { true }
fn default_detail_pane_width_pct() -> u16 { 40 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_strength: default_show_strength(),
            detail_pane_width_pct: default_detail_pane_width_pct(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
///
/// Values are key names: a single character (`"s"`, `"/"`) or a named key
/// (`"Tab"`, `"Esc"`, `"F2"`). They apply in navigation mode only; while the
/// query bar has focus every printable key types into it.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_toggle_strength")]
    pub toggle_strength: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_quit")]
    pub quit: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_query_focus() -> String { "/".to_string() }
fn default_toggle_strength() -> String { "s".to_string() }
fn default_help() -> String { "?".to_string() }
fn default_command() -> String { ":".to_string() }
fn default_quit() -> String { "q".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            query_focus: default_query_focus(),
            toggle_strength: default_toggle_strength(),
            help: default_help(),
            command: default_command(),
            quit: default_quit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Read the user's config file over the built-in defaults, writing the
    /// defaults out first if there is no file yet.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Same as [`Config::load`] with an explicit file location.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// The embedded defaults alone.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("dex")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
