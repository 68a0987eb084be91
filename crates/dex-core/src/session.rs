//! Search session: the only mutable state in the pipeline.
//!
//! A [`Session`] holds the loaded catalog (once it arrives), the current
//! query and the sort mode. It keeps no derived data: [`Session::view`]
//! re-runs the whole pipeline every time it is called.

use crate::search::{search_highlighted, Hit};
use crate::{Entity, SortMode};

/// What the presentation layer should show for the current session state.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// The catalog has not arrived (yet).
    Loading,
    /// Catalog loaded, nothing typed.
    Idle,
    /// A non-empty query matched nothing.
    NoResults,
    /// Ranked, truncated and highlighted hits, never empty.
    Results(Vec<Hit<'a>>),
}

impl View<'_> {
    /// Hits to display; empty for every state other than `Results`.
    pub fn hits(&self) -> &[Hit<'_>] {
        match self {
            View::Results(hits) => hits,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Option<Vec<Entity>>,
    query: String,
    mode: SortMode,
}

impl Session {
    /// A fresh session waiting for its catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session over an already loaded catalog.
    pub fn with_catalog(catalog: Vec<Entity>) -> Self {
        Self {
            catalog: Some(catalog),
            ..Self::default()
        }
    }

    pub fn set_catalog(&mut self, catalog: Vec<Entity>) {
        tracing::debug!(entities = catalog.len(), "session: catalog loaded");
        self.catalog = Some(catalog);
    }

    /// `None` while the catalog is still loading.
    pub fn catalog(&self) -> Option<&[Entity]> {
        self.catalog.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "session: query changed");
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SortMode) {
        self.mode = mode;
        tracing::debug!(%mode, "session: sort mode changed");
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Run the pipeline for the current query and mode.
    pub fn view(&self) -> View<'_> {
        let Some(catalog) = self.catalog.as_deref() else {
            return View::Loading;
        };
        if self.query.is_empty() {
            return View::Idle;
        }
        let hits = search_highlighted(catalog, &self.query, self.mode);
        if hits.is_empty() {
            View::NoResults
        } else {
            View::Results(hits)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
