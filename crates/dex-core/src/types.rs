//! Core types for dex-core.
//!
//! This module defines the data shared by every layer: the catalog
//! [`Entity`], the [`SortMode`] toggle and the highlight [`Segment`].

use serde::Serialize;

/// One catalog record, as produced by the catalog loader.
///
/// Entities are created once at load time and never mutated afterwards. The
/// pipeline only ever hands out shared references into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Display name. Matched against the query and highlighted.
    pub name: String,
    /// Categorical tags ("types"), in the order the source listed them.
    pub tags: Vec<String>,
    /// Maximum combat points. Never negative; `None` when the source did not
    /// record one.
    pub strength: Option<f64>,
    /// Image reference (usually a URL). Displayed, never fetched.
    pub image: String,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            strength: None,
            image: String::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Strength used for ranking: a missing value counts as `0`.
    pub fn rank_strength(&self) -> f64 {
        self.strength.unwrap_or(0.0)
    }
}

/// Secondary ordering applied after name relevance.
///
/// The UI exposes this as a single checkbox, hence the `bool` conversion:
/// `true` means "rank by strength".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Alphabetical,
    Strength,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            SortMode::Alphabetical => SortMode::Strength,
            SortMode::Strength => SortMode::Alphabetical,
        }
    }

    pub fn is_strength(self) -> bool {
        self == SortMode::Strength
    }
}

impl From<bool> for SortMode {
    fn from(by_strength: bool) -> Self {
        if by_strength {
            SortMode::Strength
        } else {
            SortMode::Alphabetical
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Alphabetical => write!(f, "alphabetical"),
            SortMode::Strength => write!(f, "strength"),
        }
    }
}

/// A fragment of a name, flagged when it is an occurrence of the query.
///
/// Segments borrow from the name they were cut from; concatenating the
/// `text` of every segment returned by [`highlight`](crate::highlight)
/// yields the name again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, is_match: false }
    }

    pub fn matched(text: &'a str) -> Self {
        Self { text, is_match: true }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_strength_ranks_as_zero() {
        let e = Entity::new("Ditto");
        assert_eq!(e.rank_strength(), 0.0);
        assert_eq!(e.strength, None);
    }

    #[test]
    fn sort_mode_from_checkbox() {
        assert_eq!(SortMode::from(true), SortMode::Strength);
        assert_eq!(SortMode::from(false), SortMode::Alphabetical);
        assert_eq!(SortMode::default(), SortMode::Alphabetical);
    }

    #[test]
    fn sort_mode_toggle_round_trips() {
        let m = SortMode::Alphabetical;
        assert_eq!(m.toggled(), SortMode::Strength);
        assert_eq!(m.toggled().toggled(), m);
    }
}
