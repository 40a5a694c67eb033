//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_admission--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it points at the `domain/{entity}/` directory.

/// Listing with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Hand-written page outside the entity domains (home, contact, ...).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_CUSTOM];

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
        assert!(is_valid_page_id("a001_institute--list"));
        assert!(is_valid_page_id("home--custom"));
        assert!(!is_valid_page_id("a001_institute"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category(PAGE_CAT_DETAIL));
        assert!(!is_known_category("dashboard"));
    }
}
