//! dex-core: the pure search pipeline behind dex.
//!
//! This crate owns the catalog data model and the three stateless pipeline
//! stages, plus the [`Session`] that ties them to the query typed by the user.
//!
//! # Architecture
//!
//! ```text
//! catalog ──► filter ──► rank ──► truncate(4) ──► highlight ──► view
//! ```
//!
//! Nothing here performs I/O. Loading the catalog is the job of `dex-catalog`
//! and rendering is the job of `dex-tui`; both talk to this crate through
//! plain values.

pub mod config;
pub mod search;
pub mod session;
pub mod types;

pub use search::{filter, highlight, rank, search, search_highlighted, Hit, RESULT_LIMIT};
pub use session::{Session, View};
pub use types::{Entity, Segment, SortMode};
