//! dex-catalog: catalog loading for dex.
//!
//! Fetches the catalog once from a [`CatalogSource`] (HTTP URL, local file or
//! stdin), validates every record and hands back a `Vec<Entity>`. The TUI
//! runs the load as a background task and receives the outcome on a
//! `tokio` oneshot channel; headless mode simply awaits it.

pub mod error;
pub mod loader;
pub mod record;
pub mod source;

pub use error::{CatalogError, Result};
pub use loader::{load, spawn_load};
pub use record::parse_catalog;
pub use source::CatalogSource;
