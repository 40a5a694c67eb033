/// Sentinel the filter dropdowns use for "no filter".
pub const ALL: &str = "all";

/// Categorical filters a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKey {
    City,
    Field,
    Category,
}

impl FacetKey {
    pub fn param(&self) -> &'static str {
        match self {
            FacetKey::City => "city",
            FacetKey::Field => "field",
            FacetKey::Category => "category",
        }
    }
}

/// Filter state of one listing page: search text, facets and 1-based page.
///
/// Values are always normalised, so two states describing the same filter
/// compare equal and serialise to the same query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    pub city: Option<String>,
    pub field: Option<String>,
    pub category: Option<String>,
    pub page: u32,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            city: None,
            field: None,
            category: None,
            page: 1,
        }
    }
}

/// Empty and the "all" sentinel both mean "no filter".
pub fn normalize_facet(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ListingFilter {
    pub fn facet(&self, key: FacetKey) -> Option<&str> {
        match key {
            FacetKey::City => self.city.as_deref(),
            FacetKey::Field => self.field.as_deref(),
            FacetKey::Category => self.category.as_deref(),
        }
    }

    fn facet_mut(&mut self, key: FacetKey) -> &mut Option<String> {
        match key {
            FacetKey::City => &mut self.city,
            FacetKey::Field => &mut self.field,
            FacetKey::Category => &mut self.category,
        }
    }

    /// Facet value as the dropdowns expect it (`"all"` when unset).
    pub fn facet_or_all(&self, key: FacetKey) -> String {
        self.facet(key).unwrap_or(ALL).to_string()
    }

    /// Search text as sent to the backend (`None` when blank).
    pub fn search_term(&self) -> Option<&str> {
        let s = self.search.trim();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    pub fn active_filter_count(&self) -> usize {
        [
            self.search_term().is_some(),
            self.city.is_some(),
            self.field.is_some(),
            self.category.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Only the category facet and the page; for listings without search.
    pub fn category_only(&self) -> ListingFilter {
        ListingFilter {
            category: self.category.clone(),
            page: self.page,
            ..Default::default()
        }
    }

    pub fn is_default(&self) -> bool {
        self == &ListingFilter::default()
    }
}

/// Transitions of the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetSearch(String),
    SetFacet(FacetKey, String),
    GoToPage(u32),
    NextPage { total_pages: u32 },
    PrevPage,
    /// Pull a deep-linked page back inside the known page count.
    ClampPage { total_pages: u32 },
    Clear,
}

/// Pure reducer. Any change of search text or of a facet restarts at page 1.
pub fn reduce(state: &ListingFilter, action: FilterAction) -> ListingFilter {
    let mut next = state.clone();
    match action {
        FilterAction::SetSearch(text) => {
            let text = text.trim().to_string();
            if next.search == text {
                return next;
            }
            next.search = text;
            next.page = 1;
        }
        FilterAction::SetFacet(key, value) => {
            let value = normalize_facet(&value);
            let slot = next.facet_mut(key);
            if *slot == value {
                return next;
            }
            *slot = value;
            next.page = 1;
        }
        FilterAction::GoToPage(page) => {
            next.page = page.max(1);
        }
        FilterAction::NextPage { total_pages } => {
            next.page = (next.page + 1).min(total_pages.max(1)).max(1);
        }
        FilterAction::PrevPage => {
            next.page = next.page.saturating_sub(1).max(1);
        }
        FilterAction::ClampPage { total_pages } => {
            next.page = next.page.clamp(1, total_pages.max(1));
        }
        FilterAction::Clear => {
            next = ListingFilter::default();
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> ListingFilter {
        ListingFilter {
            page,
            ..Default::default()
        }
    }

    #[test]
    fn test_search_resets_page() {
        let next = reduce(&on_page(4), FilterAction::SetSearch("nust".into()));
        assert_eq!(next.search, "nust");
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_facet_resets_page() {
        let next = reduce(&on_page(3), FilterAction::SetFacet(FacetKey::City, "Lahore".into()));
        assert_eq!(next.city.as_deref(), Some("Lahore"));
        assert_eq!(next.page, 1);

        let next = reduce(&on_page(3), FilterAction::SetFacet(FacetKey::Field, "Medical".into()));
        assert_eq!(next.field.as_deref(), Some("Medical"));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_unchanged_value_keeps_page() {
        let mut state = on_page(5);
        state.city = Some("Karachi".into());
        let next = reduce(&state, FilterAction::SetFacet(FacetKey::City, "Karachi".into()));
        assert_eq!(next, state);

        let next = reduce(&on_page(5), FilterAction::SetFacet(FacetKey::City, "all".into()));
        assert_eq!(next.page, 5);
    }

    #[test]
    fn test_all_sentinel_and_empty_clear_facet() {
        let mut state = on_page(2);
        state.city = Some("Lahore".into());
        let next = reduce(&state, FilterAction::SetFacet(FacetKey::City, "all".into()));
        assert_eq!(next.city, None);
        assert_eq!(next.page, 1);

        state.category = Some("MDCAT".into());
        let next = reduce(&state, FilterAction::SetFacet(FacetKey::Category, "  ".into()));
        assert_eq!(next.category, None);
    }

    #[test]
    fn test_paging_never_wraps() {
        assert_eq!(reduce(&on_page(1), FilterAction::PrevPage).page, 1);
        assert_eq!(reduce(&on_page(3), FilterAction::NextPage { total_pages: 3 }).page, 3);
        assert_eq!(reduce(&on_page(2), FilterAction::NextPage { total_pages: 3 }).page, 3);
        assert_eq!(reduce(&on_page(1), FilterAction::NextPage { total_pages: 0 }).page, 1);
        assert_eq!(reduce(&on_page(3), FilterAction::GoToPage(0)).page, 1);
    }

    #[test]
    fn test_search_is_stored_trimmed() {
        let state = reduce(&on_page(3), FilterAction::SetSearch("  nust ".into()));
        assert_eq!(state.search, "nust");
        assert_eq!(state.page, 1);

        let mut deep = state.clone();
        deep.page = 4;
        let next = reduce(&deep, FilterAction::SetSearch("nust ".into()));
        assert_eq!(next, deep);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(reduce(&on_page(5), FilterAction::ClampPage { total_pages: 2 }).page, 2);
        assert_eq!(reduce(&on_page(2), FilterAction::ClampPage { total_pages: 3 }).page, 2);
        assert_eq!(reduce(&on_page(4), FilterAction::ClampPage { total_pages: 0 }).page, 1);
    }

    #[test]
    fn test_category_only() {
        let state = ListingFilter {
            search: "lat".into(),
            city: Some("Lahore".into()),
            field: Some("Law".into()),
            category: Some("Law".into()),
            page: 2,
        };
        let tests_view = state.category_only();
        assert_eq!(tests_view.category.as_deref(), Some("Law"));
        assert_eq!(tests_view.page, 2);
        assert_eq!(tests_view.search_term(), None);
        assert_eq!((tests_view.city, tests_view.field), (None, None));
    }

    #[test]
    fn test_clear() {
        let state = ListingFilter {
            search: "lums".into(),
            city: Some("Lahore".into()),
            field: Some("Business".into()),
            category: None,
            page: 6,
        };
        assert_eq!(state.active_filter_count(), 3);
        let cleared = reduce(&state, FilterAction::Clear);
        assert!(cleared.is_default());
        assert_eq!(cleared.active_filter_count(), 0);
    }

    #[test]
    fn test_blank_search_is_not_a_filter() {
        let state = reduce(&on_page(1), FilterAction::SetSearch("   ".into()));
        assert_eq!(state.search_term(), None);
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.facet_or_all(FacetKey::City), "all");
    }
}
