use super::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

fn first_page() -> u32 {
    1
}

/// Pagination envelope returned next to every list payload.
///
/// Every field is optional on the wire; older endpoints send `total`
/// instead of `totalItems`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default, alias = "total")]
    pub total_items: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::empty(0)
    }
}

impl Pagination {
    /// One empty page: what a list collapses to after any fetch failure.
    pub fn empty(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total_pages: 1,
            total_items: 0,
        }
    }

    /// Derive pagination for a collection held entirely on the client.
    pub fn local(total_items: usize, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            1
        } else {
            (total_items as u64).div_ceil(limit as u64).max(1) as u32
        };
        Self {
            page: page.clamp(1, total_pages),
            limit,
            total_pages,
            total_items: total_items as u64,
        }
    }
}

/// Backend-supplied enumerations used to populate filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFacets {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<String>,
}

/// One page of a list endpoint, normalised across the envelope shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub facets: FilterFacets,
}

impl<T> ListPage<T> {
    pub fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::empty(limit),
            facets: FilterFacets::default(),
        }
    }

    /// Pagination from the payload, or a single page at the requested
    /// position when the backend left it out.
    pub fn resolve_pagination(raw: Option<Pagination>, page: u32, limit: u32) -> Pagination {
        match raw {
            Some(mut p) => {
                if p.limit == 0 {
                    p.limit = limit;
                }
                p.total_pages = p.total_pages.max(1);
                p
            }
            None => Pagination {
                page,
                limit,
                total_pages: 1,
                total_items: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let p: Pagination =
            serde_json::from_str(r#"{"page":2,"limit":10,"totalPages":3,"totalItems":25}"#)
                .unwrap();
        assert_eq!(
            p,
            Pagination {
                page: 2,
                limit: 10,
                total_pages: 3,
                total_items: 25
            }
        );
    }

    #[test]
    fn test_total_alias_and_defaults() {
        let p: Pagination = serde_json::from_str(r#"{"total": 8}"#).unwrap();
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.total_items, 8);
    }

    #[test]
    fn test_empty_pagination() {
        let p = Pagination::empty(10);
        assert_eq!((p.page, p.limit, p.total_pages, p.total_items), (1, 10, 1, 0));
    }

    #[test]
    fn test_local_pagination() {
        assert_eq!(Pagination::local(25, 3, 10).total_pages, 3);
        assert_eq!(Pagination::local(0, 1, 10).total_pages, 1);
        assert_eq!(Pagination::local(20, 9, 10).page, 2);
    }

    #[test]
    fn test_resolve_missing_pagination() {
        let p = ListPage::<()>::resolve_pagination(None, 4, 7);
        assert_eq!(p.page, 4);
        assert_eq!(p.limit, 7);
        assert_eq!(p.total_pages, 1);

        let zero = Pagination {
            page: 1,
            limit: 0,
            total_pages: 0,
            total_items: 0,
        };
        let p = ListPage::<()>::resolve_pagination(Some(zero), 1, 10);
        assert_eq!(p.limit, 10);
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn test_null_facets() {
        let f: FilterFacets = serde_json::from_str(r#"{"cities": null}"#).unwrap();
        assert!(f.cities.is_empty());
        assert!(f.fields.is_empty());
    }
}
