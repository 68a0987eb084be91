//! Case-insensitive literal substring scanner.
//!
//! The query is folded once with per-character simple lowercasing; haystack
//! characters are folded on the fly while scanning. A match must start and
//! end on character boundaries of the original haystack, so the returned
//! byte ranges can always be used to slice it, even when lowercasing changes
//! the byte length of a character.
//!
//! The query is never interpreted as a pattern: `.`, `*`, `(` and friends
//! are ordinary characters here.

use std::ops::Range;

/// A folded query, ready to be searched for in many haystacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    folded: Vec<char>,
}

impl Needle {
    pub fn new(query: &str) -> Self {
        Self {
            folded: query.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// True when `haystack` contains the needle. The empty needle is
    /// contained in every haystack.
    pub fn is_in(&self, haystack: &str) -> bool {
        self.is_empty() || self.find_from(haystack, 0).is_some()
    }

    /// Byte range of the first occurrence starting at or after byte `from`.
    ///
    /// `from` must lie on a character boundary of `haystack`. Returns `None`
    /// for the empty needle, which has no meaningful occurrence.
    pub fn find_from(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        if self.is_empty() || from >= haystack.len() {
            return None;
        }
        haystack[from..]
            .char_indices()
            .map(|(offset, _)| from + offset)
            .find_map(|start| self.match_at(haystack, start).map(|end| start..end))
    }

    /// Iterate over every non-overlapping occurrence, left to right.
    pub fn find_iter<'n, 'h>(&'n self, haystack: &'h str) -> Occurrences<'n, 'h> {
        Occurrences { needle: self, haystack, pos: 0 }
    }

    /// End offset of a match anchored at `start`, if there is one.
    fn match_at(&self, haystack: &str, start: usize) -> Option<usize> {
        let mut remaining = self.folded.as_slice();
        for (offset, c) in haystack[start..].char_indices() {
            if remaining.is_empty() {
                return Some(start + offset);
            }
            for lower in c.to_lowercase() {
                match remaining.split_first() {
                    Some((&want, rest)) if want == lower => remaining = rest,
                    _ => return None,
                }
            }
        }
        remaining.is_empty().then_some(haystack.len())
    }
}

/// Iterator returned by [`Needle::find_iter`].
#[derive(Debug)]
pub struct Occurrences<'n, 'h> {
    needle: &'n Needle,
    haystack: &'h str,
    pos: usize,
}

impl Iterator for Occurrences<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.needle.find_from(self.haystack, self.pos)?;
        self.pos = found.end;
        Some(found)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_case_insensitively() {
        let n = Needle::new("CHU");
        assert_eq!(n.find_from("Pikachu", 0), Some(4..7));
        assert!(n.is_in("RAICHU"));
        assert!(!n.is_in("Pichy"));
    }

    #[test]
    fn empty_needle_is_everywhere_but_never_found() {
        let n = Needle::new("");
        assert!(n.is_in("anything"));
        assert!(n.is_in(""));
        assert_eq!(n.find_from("anything", 0), None);
        assert_eq!(n.find_iter("anything").count(), 0);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let n = Needle::new("aa");
        let found: Vec<_> = n.find_iter("aaaaa").collect();
        assert_eq!(found, vec![0..2, 2..4]);
    }

    #[test]
    fn adjacent_occurrences_are_all_found() {
        let n = Needle::new("ab");
        let found: Vec<_> = n.find_iter("ABab").collect();
        assert_eq!(found, vec![0..2, 2..4]);
    }

    #[test]
    fn metacharacters_are_literal() {
        assert!(Needle::new("mr. mime").is_in("Mr. Mime"));
        assert!(!Needle::new(".").is_in("Mew"));
        assert!(Needle::new("(").is_in("Farfetch(d)"));
        assert!(!Needle::new("*").is_in("Abra"));
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert!(!Needle::new("pikachu!").is_in("pikachu"));
    }

    #[test]
    fn ranges_are_char_boundaries_for_multibyte_text() {
        let name = "Flabébé";
        let n = Needle::new("BÉ");
        let found: Vec<_> = n.find_iter(name).collect();
        assert_eq!(found.len(), 2);
        for r in &found {
            assert!(name.is_char_boundary(r.start));
            assert!(name.is_char_boundary(r.end));
            assert_eq!(name[r.clone()].to_lowercase(), "bé");
        }
    }

    #[test]
    fn match_must_not_end_inside_a_folded_character() {
        // 'İ' lowercases to "i\u{307}"; a bare "i" would stop halfway.
        let n = Needle::new("i");
        assert_eq!(n.find_from("İx", 0), None);
        assert!(Needle::new("i\u{307}x").is_in("İx"));
    }

    proptest::proptest! {
        #[test]
        fn agrees_with_lowercase_contains(hay in "[a-zA-Z ]{0,16}", q in "[a-zA-Z]{0,4}") {
            let expected = hay.to_lowercase().contains(&q.to_lowercase());
            proptest::prop_assert_eq!(Needle::new(&q).is_in(&hay), expected);
        }

        #[test]
        fn occurrences_are_ordered_and_disjoint(hay in "[abAB]{0,16}", q in "[ab]{1,3}") {
            let found: Vec<_> = Needle::new(&q).find_iter(&hay).collect();
            for pair in found.windows(2) {
                proptest::prop_assert!(pair[0].end <= pair[1].start);
            }
            for r in &found {
                proptest::prop_assert_eq!(hay[r.clone()].to_lowercase(), q.clone());
            }
        }
    }
}
