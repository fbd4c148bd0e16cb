//! Derivation logic over the static tables: category filtering,
//! technology-chip truncation, and the expand/collapse set.

use crate::types::{CategoryFilter, Technology};
use std::collections::HashSet;

/// Collapsed experience cards show at most this many technology chips.
pub const COLLAPSED_TECH_LIMIT: usize = 6;

/// Stable filter over the technologies table: `All` yields the whole
/// table, any other selection yields the matching entries in their
/// original relative order. The table itself is never touched.
pub fn filter_technologies(
    table: &'static [Technology],
    filter: CategoryFilter,
) -> Vec<&'static Technology> {
    table
        .iter()
        .filter(|tech| filter.matches(tech.category))
        .collect()
}

/// The technology chips shown for an entry: all of them when expanded,
/// otherwise the first [`COLLAPSED_TECH_LIMIT`].
pub fn visible_technologies(
    technologies: &'static [&'static str],
    expanded: bool,
) -> &'static [&'static str] {
    if expanded {
        technologies
    } else {
        &technologies[..technologies.len().min(COLLAPSED_TECH_LIMIT)]
    }
}

/// The "+N" count next to a collapsed chip list; zero when expanded or
/// when nothing was cut off.
pub fn overflow_count(total: usize, expanded: bool) -> usize {
    if expanded {
        0
    } else {
        total.saturating_sub(COLLAPSED_TECH_LIMIT)
    }
}

/// Experience entries whose detail view is currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    ids: HashSet<&'static str>,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id` if absent, removes it if present. Toggling the same
    /// id twice restores the previous state.
    pub fn toggle(&mut self, id: &'static str) {
        if !self.ids.remove(id) {
            self.ids.insert(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TECHNOLOGIES;
    use crate::types::{Category, CategoryFilter};

    #[test]
    fn all_filter_preserves_the_whole_table() {
        let visible = filter_technologies(&TECHNOLOGIES, CategoryFilter::All);
        assert_eq!(visible.len(), TECHNOLOGIES.len());
        for (shown, source) in visible.iter().zip(TECHNOLOGIES.iter()) {
            assert_eq!(shown.name, source.name);
        }
    }

    #[test]
    fn category_filter_keeps_source_order() {
        let mobile = filter_technologies(&TECHNOLOGIES, CategoryFilter::Only(Category::Mobile));
        assert!(!mobile.is_empty());
        assert!(mobile.iter().all(|tech| tech.category == Category::Mobile));

        let expected: Vec<_> = TECHNOLOGIES
            .iter()
            .filter(|tech| tech.category == Category::Mobile)
            .map(|tech| tech.name)
            .collect();
        let got: Vec<_> = mobile.iter().map(|tech| tech.name).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        static EMPTY: [crate::types::Technology; 0] = [];
        let visible = filter_technologies(&EMPTY, CategoryFilter::Only(Category::Backend));
        assert!(visible.is_empty());
    }

    #[test]
    fn collapsed_view_truncates_to_six() {
        static CHIPS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
        assert_eq!(visible_technologies(&CHIPS, false), &CHIPS[..6]);
        assert_eq!(overflow_count(CHIPS.len(), false), 2);
    }

    #[test]
    fn short_lists_are_never_padded_or_cut() {
        static CHIPS: [&str; 4] = ["a", "b", "c", "d"];
        assert_eq!(visible_technologies(&CHIPS, false), &CHIPS[..]);
        assert_eq!(overflow_count(CHIPS.len(), false), 0);
    }

    #[test]
    fn expanded_view_shows_everything() {
        static CHIPS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
        assert_eq!(visible_technologies(&CHIPS, true), &CHIPS[..]);
        assert_eq!(overflow_count(CHIPS.len(), true), 0);
    }

    #[test]
    fn double_toggle_is_a_no_op() {
        let mut expanded = ExpandedSet::new();
        expanded.toggle("navilens");
        let snapshot = expanded.clone();

        expanded.toggle("lol-esports-tracker");
        expanded.toggle("lol-esports-tracker");
        assert_eq!(expanded, snapshot);
        assert!(expanded.contains("navilens"));
        assert!(!expanded.contains("lol-esports-tracker"));
    }
}
