//! Query-string codec for listing filters.
//!
//! The URL is the only durable client-side state: serialising omits every
//! parameter at its default value, parsing never fails.

use super::filter_state::{normalize_facet, ListingFilter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ListingQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    // Kept as text so a malformed page does not discard the other filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
}

pub fn to_query_string(filter: &ListingFilter) -> String {
    let query = ListingQuery {
        search: Some(filter.search.clone()).filter(|s| !s.is_empty()),
        city: filter.city.clone(),
        field: filter.field.clone(),
        category: filter.category.clone(),
        page: (filter.page > 1).then(|| filter.page.to_string()),
    };
    serde_qs::to_string(&query).unwrap_or_default()
}

pub fn from_query_string(query: &str) -> ListingFilter {
    let raw: ListingQuery =
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

    ListingFilter {
        search: raw
            .search
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_default(),
        city: raw.city.as_deref().and_then(normalize_facet),
        field: raw.field.as_deref().and_then(normalize_facet),
        category: raw.category.as_deref().and_then(normalize_facet),
        page: raw
            .page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::filter_state::{reduce, FacetKey, FilterAction};

    #[test]
    fn test_default_state_is_empty_query() {
        assert_eq!(to_query_string(&ListingFilter::default()), "");
        assert_eq!(from_query_string(""), ListingFilter::default());
        assert_eq!(from_query_string("?"), ListingFilter::default());
    }

    #[test]
    fn test_only_non_default_values_are_written() {
        let state = ListingFilter {
            search: "nust".into(),
            city: Some("Lahore".into()),
            page: 2,
            ..Default::default()
        };
        assert_eq!(to_query_string(&state), "search=nust&city=Lahore&page=2");

        let first_page = ListingFilter {
            field: Some("Medical".into()),
            ..Default::default()
        };
        assert_eq!(to_query_string(&first_page), "field=Medical");
    }

    #[test]
    fn test_parse_normalises() {
        let state = from_query_string("?city=all&field=&page=abc&search=%20&unknown=1");
        assert_eq!(state, ListingFilter::default());

        let state = from_query_string("page=0&category=MDCAT");
        assert_eq!(state.page, 1);
        assert_eq!(state.category.as_deref(), Some("MDCAT"));
    }

    #[test]
    fn test_round_trip_through_reducer_states() {
        let mut state = ListingFilter::default();
        let actions = vec![
            FilterAction::SetSearch("beacon house".into()),
            FilterAction::SetFacet(FacetKey::City, "Rawalpindi".into()),
            FilterAction::NextPage { total_pages: 4 },
            FilterAction::SetFacet(FacetKey::Field, "Computer Science & IT".into()),
            FilterAction::GoToPage(3),
            FilterAction::SetFacet(FacetKey::Category, "all".into()),
            FilterAction::SetSearch(String::new()),
            FilterAction::Clear,
        ];
        for action in actions {
            state = reduce(&state, action);
            let encoded = to_query_string(&state);
            assert_eq!(from_query_string(&encoded), state, "query: {encoded}");
        }
    }
}
