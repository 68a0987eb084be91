//! Highlight stage: split a name into matched and unmatched segments.

use super::matcher::Needle;
use crate::Segment;

/// Cut `name` into segments around every occurrence of `query`.
///
/// Occurrences are found left to right without overlap. Unmatched gaps of
/// zero length are skipped, so two adjacent occurrences produce two adjacent
/// matched segments. The trailing gap is emitted whenever anything is left
/// after the last occurrence, including a single final character.
///
/// With an empty query, or when nothing matches, the whole name comes back
/// as one unmatched segment.
pub fn highlight<'a>(name: &'a str, query: &str) -> Vec<Segment<'a>> {
    let needle = Needle::new(query);

    let mut segments = Vec::new();
    let mut position = 0;
    for found in needle.find_iter(name) {
        if position < found.start {
            segments.push(Segment::plain(&name[position..found.start]));
        }
        segments.push(Segment::matched(&name[found.clone()]));
        position = found.end;
    }

    if segments.is_empty() {
        return vec![Segment::plain(name)];
    }
    if position < name.len() {
        segments.push(Segment::plain(&name[position..]));
    }
    segments
}
