//! Client-side substring filtering used by the static lists.

/// Types that can be matched against a free-text filter.
pub trait Searchable {
    /// `filter` is already trimmed and non-empty.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Keep the items matching `filter`. A blank filter keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive `contains`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
