//! Search layer: filter, rank and highlight.
//!
//! Every stage is a pure function over borrowed catalog data. [`search`]
//! chains filter and rank and cuts the result down to [`RESULT_LIMIT`]
//! entries; [`search_highlighted`] additionally highlights the surviving
//! names for display.

mod filter;
mod highlight;
pub mod matcher;
mod rank;

pub use filter::filter;
pub use highlight::highlight;
pub use rank::{collate, rank};

use crate::{Entity, Segment, SortMode};

/// Number of entries kept after ranking.
pub const RESULT_LIMIT: usize = 4;

/// A ranked entity together with its highlighted name.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<'a> {
    pub entity: &'a Entity,
    pub segments: Vec<Segment<'a>>,
}

/// Filter, rank and truncate `catalog` for `query`.
pub fn search<'a>(catalog: &'a [Entity], query: &str, mode: SortMode) -> Vec<&'a Entity> {
    let mut ranked = rank(filter(catalog, query), query, mode);
    ranked.truncate(RESULT_LIMIT);
    tracing::trace!(query, %mode, hits = ranked.len(), "search");
    ranked
}

/// [`search`], then highlight each surviving name.
pub fn search_highlighted<'a>(catalog: &'a [Entity], query: &str, mode: SortMode) -> Vec<Hit<'a>> {
    search(catalog, query, mode)
        .into_iter()
        .map(|entity| Hit {
            entity,
            segments: highlight(&entity.name, query),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
