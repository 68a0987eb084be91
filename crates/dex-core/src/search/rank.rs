//! Ranking stage.
//!
//! Entities whose *name* contains the query come first (tag-only matches are
//! pushed back). Within that split, names follow Unicode collation with the
//! CLDR root order, the same order a browser's `localeCompare` gives: accents
//! sort next to their base letter and lowercase precedes uppercase. In
//! strength mode the alphabetical ordering is computed first and a second
//! stable sort by strength is layered on top, so equal strengths keep their
//! alphabetical order. Both passes rely on `sort_by` being stable.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use super::matcher::Needle;
use crate::{Entity, SortMode};

/// Reorder `entities` for display. The entities themselves are untouched.
pub fn rank<'a>(entities: Vec<&'a Entity>, query: &str, mode: SortMode) -> Vec<&'a Entity> {
    let needle = Needle::new(query);

    let mut keyed: Vec<(bool, &'a Entity)> = entities
        .into_iter()
        .map(|e| (needle.is_in(&e.name), e))
        .collect();
    let mut collator = name_collator();
    keyed.sort_by(|(a_fg, a), (b_fg, b)| {
        b_fg.cmp(a_fg)
            .then_with(|| collator.collate(a.name.as_str(), b.name.as_str()))
    });
    let mut ranked: Vec<&'a Entity> = keyed.into_iter().map(|(_, e)| e).collect();

    if mode == SortMode::Strength {
        ranked.sort_by(|a, b| b.rank_strength().total_cmp(&a.rank_strength()));
    }
    ranked
}

/// Alphabetical name order, as used by [`rank`].
///
/// Builds a fresh collator per call; `rank` keeps one for the whole sort.
pub fn collate(a: &str, b: &str) -> Ordering {
    name_collator().collate(a, b)
}

// CLDR root with non-ignorable punctuation, like ICU's default. Identical
// collation keys fall back to byte order so the order stays total.
fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}
