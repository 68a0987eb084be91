use std::io::Write;

use anyhow::Context;
use clap::Parser;
use dex::headless::{self, Format};
use dex_catalog::CatalogSource;
use dex_core::{config::Config, search_highlighted, SortMode};

#[derive(Parser)]
#[command(name = "dex", about = "dex — incremental creature search")]
struct Cli {
    /// Catalog to search: an http(s) URL, a JSON file, or `-` for stdin
    /// (headless only). Defaults to `catalog.source` from the config file.
    #[arg(long, value_name = "SOURCE")]
    catalog: Option<CatalogSource>,

    /// Start with this query already typed.
    #[arg(long, short)]
    query: Option<String>,

    /// Rank by max CP instead of alphabetically.
    #[arg(long)]
    strength: bool,

    /// Print the results once instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Output format for --headless.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write debug logs to /tmp/dex-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dex-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("dex debug log started — tail -f /tmp/dex-debug.log");
    } else if cli.headless {
        // The terminal is free in headless mode; surface warnings on stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .init();
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load config, using defaults");
        Config::defaults()
    });
    let source = cli
        .catalog
        .unwrap_or_else(|| CatalogSource::parse(&config.catalog.source));

    if !cli.headless {
        return dex_tui::run(
            config,
            dex_tui::Options {
                source,
                query: cli.query,
                strength: cli.strength,
            },
        );
    }

    let rt = tokio::runtime::Runtime::new()?;
    let catalog = rt
        .block_on(dex_catalog::load(&source))
        .with_context(|| format!("loading catalog from {source}"))?;

    let query = cli.query.unwrap_or_default();
    let hits = search_highlighted(&catalog, &query, SortMode::from(cli.strength));
    let out = headless::render(&hits, &query, cli.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
