//! Fuzzy filtering using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy-matches `query` against `items`.
///
/// Returns matches sorted by score (highest first). Items with equal
/// scores keep their original order. An empty query matches every item
/// with score 0.
///
/// # Example
///
/// ```
/// use datatable_lib::query::fuzzy_filter;
///
/// let names = ["Jordan", "Jo", "Maria"];
/// let matches = fuzzy_filter("jo", &names);
///
/// assert_eq!(matches.len(), 2);
/// assert!(matches.iter().all(|m| m.index != 2));
/// ```
pub fn fuzzy_filter<S: AsRef<str>>(query: &str, items: &[S]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let haystack = Utf32Str::new(item.as_ref(), &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        let matches = fuzzy_filter("", &["a", "b", "c"]);
        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_non_matching_items_are_dropped() {
        let matches = fuzzy_filter("xyz", &["alpha", "beta"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_case_insensitive_and_scored() {
        let matches = fuzzy_filter("mar", &["Omar", "Maria", "Bob"]);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].score >= matches[1].score);
        assert!(matches.iter().all(|m| m.index != 2));
    }
}
