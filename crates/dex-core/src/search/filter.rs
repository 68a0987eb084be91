//! Filter stage: keep entities whose name or any tag contains the query.

use super::matcher::Needle;
use crate::Entity;

/// Reduce `entities` to those matching `query`, preserving their order.
///
/// The empty query means "nothing typed yet" and keeps everything. Otherwise
/// an entity survives when its name, or at least one of its tags, contains
/// the query case-insensitively.
pub fn filter<'a>(entities: &'a [Entity], query: &str) -> Vec<&'a Entity> {
    let needle = Needle::new(query);
    if needle.is_empty() {
        return entities.iter().collect();
    }
    entities
        .iter()
        .filter(|e| matches(e, &needle))
        .collect()
}

fn matches(entity: &Entity, needle: &Needle) -> bool {
    needle.is_in(&entity.name) || entity.tags.iter().any(|t| needle.is_in(t))
}
