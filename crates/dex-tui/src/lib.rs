//! dex TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use anyhow::bail;
use dex_catalog::CatalogSource;
use dex_core::{config::Config, Session, SortMode};

/// What the command line asked the TUI to start with.
#[derive(Debug, Clone)]
pub struct Options {
    pub source: CatalogSource,
    pub query: Option<String>,
    pub strength: bool,
}

/// Start loading the catalog in the background and run the TUI until the
/// user quits.
pub fn run(config: Config, opts: Options) -> anyhow::Result<()> {
    if opts.source.is_stdin() {
        bail!("cannot read the catalog from stdin in interactive mode; use --headless or pass a file");
    }

    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });

    let mut session = Session::new();
    if let Some(query) = opts.query {
        session.set_query(query);
    }
    session.set_mode(SortMode::from(opts.strength));

    let rt = tokio::runtime::Runtime::new()?;
    let feed = dex_catalog::spawn_load(rt.handle(), opts.source.clone());

    App::new(session, config, theme)?
        .loading_from(&opts.source, feed)
        .run()
}
