//! dex: incremental creature search for the terminal.
//!
//! The workspace crates are re-exported here so integration tests and
//! benches can reach every layer through one import.
//!
//! # Architecture
//!
//! ```text
//! Catalog source ──► dex-catalog ──► Session ──► filter ─► rank ─► highlight ──► UI / headless
//! ```
//!
//! The catalog is fetched once on a background task; everything after that
//! is pure and synchronous.

pub mod headless;

pub use dex_catalog;
pub use dex_core;
pub use dex_tui;
