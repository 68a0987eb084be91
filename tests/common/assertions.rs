//! Domain-specific assertion macros for dex harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! ordering or highlight property was violated.

/// Assert the names of a result list, in order.
///
/// ```rust
/// assert_names!(search(&catalog, "chu", mode), ["Pikachu", "Raichu"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($entities:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $entities.iter().map(|e| e.name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "result names differ");
    }};
}

/// Assert that highlight segments glue back together into `name`.
#[macro_export]
macro_rules! assert_reconstructs {
    ($segments:expr, $name:expr) => {{
        let joined: String = $segments.iter().map(|s| s.text).collect();
        let name: &str = $name;
        if joined != name {
            panic!(
                "assert_reconstructs! failed:\n  segments: {:?}\n  joined:   {:?}\n  name:     {:?}",
                $segments, joined, name
            );
        }
    }};
}

/// Assert strength ordering for `query`: descending strength, and equal
/// strengths keep the alphabetical pass order (name matches first, then
/// collation).
#[macro_export]
macro_rules! assert_strength_order {
    ($entities:expr, $query:expr) => {{
        let needle = dex_core::search::matcher::Needle::new($query);
        for pair in $entities.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (sa, sb) = (a.rank_strength(), b.rank_strength());
            let (fa, fb) = (needle.is_in(&a.name), needle.is_in(&b.name));
            let ok = sa > sb
                || (sa == sb
                    && (fa && !fb
                        || fa == fb
                            && dex_core::search::collate(&a.name, &b.name)
                                != std::cmp::Ordering::Greater));
            if !ok {
                panic!(
                    "assert_strength_order! failed: {:?} ({}) before {:?} ({})",
                    a.name, sa, b.name, sb
                );
            }
        }
    }};
}
