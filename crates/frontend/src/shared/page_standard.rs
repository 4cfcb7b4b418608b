//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_major--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads to `domain/a001_major/`.

/// Catalogue of records with filters and paging.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Landing and other free-form content pages.
pub const PAGE_CAT_LANDING: &str = "landing";

/// Account pages (login, register).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_LANDING,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_major--list"));
        assert!(is_valid_page_id("a001_major--detail"));
        assert!(!is_valid_page_id("a001_major"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(is_known_category("system"));
        assert!(!is_known_category("dashboard"));
    }
}
