use crate::domain::common::{FilterFacets, ListPage, Pagination};
use std::collections::BTreeMap;

/// A filterable value with the number of items carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub name: String,
    pub count: usize,
}

impl Facet {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}

/// Synthetic `all_label` facet with the total first, then every category in
/// name order. Items without a category only count towards the total.
pub fn category_facets<T, F>(items: &[T], category_of: F, all_label: &str) -> Vec<Facet>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        if let Some(category) = category_of(item).map(str::trim).filter(|c| !c.is_empty()) {
            *counts.entry(category).or_default() += 1;
        }
    }

    std::iter::once(Facet::new(all_label, items.len()))
        .chain(counts.into_iter().map(|(name, count)| Facet::new(name, count)))
        .collect()
}

/// Exact-match category filter; `None` or the synthetic label keeps all.
pub fn filter_by_category<T, F>(
    items: &[T],
    selected: Option<&str>,
    all_label: &str,
    category_of: F,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<&str>,
{
    match selected {
        None => items.to_vec(),
        Some(s) if s == all_label => items.to_vec(),
        Some(s) => items
            .iter()
            .filter(|item| category_of(*item).map(str::trim) == Some(s))
            .cloned()
            .collect(),
    }
}

/// Client-side page: `items[(page-1)*limit .. page*limit]` with pagination
/// derived from the collection size.
pub fn page_slice<T: Clone>(items: &[T], page: u32, limit: u32) -> ListPage<T> {
    let pagination = Pagination::local(items.len(), page, limit);
    let start = ((pagination.page - 1) as usize).saturating_mul(limit as usize);
    let end = start.saturating_add(limit as usize).min(items.len());
    let slice = if start < end {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };
    ListPage {
        items: slice,
        pagination,
        facets: FilterFacets::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TESTS: &str = "All Tests";

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        category: Option<String>,
    }

    impl Item {
        fn new(id: u32, category: Option<&str>) -> Self {
            Self {
                id,
                category: category.map(str::to_string),
            }
        }

        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }
    }

    #[test]
    fn test_facets_sorted_after_synthetic_all() {
        let items = vec![
            Item::new(1, Some("MDCAT")),
            Item::new(2, Some("MDCAT")),
            Item::new(3, Some("ECAT")),
        ];
        let facets = category_facets(&items, Item::category, ALL_TESTS);
        assert_eq!(
            facets,
            vec![
                Facet::new("All Tests", 3),
                Facet::new("ECAT", 1),
                Facet::new("MDCAT", 2),
            ]
        );
    }

    #[test]
    fn test_uncategorised_items_only_count_towards_total() {
        let items = vec![Item::new(1, None), Item::new(2, Some("")), Item::new(3, Some("LAT"))];
        let facets = category_facets(&items, Item::category, ALL_TESTS);
        assert_eq!(facets, vec![Facet::new("All Tests", 3), Facet::new("LAT", 1)]);
    }

    #[test]
    fn test_filter_by_category() {
        let items = vec![
            Item::new(1, Some("MDCAT")),
            Item::new(2, Some("ECAT")),
            Item::new(3, Some("MDCAT")),
        ];
        let ids = |v: Vec<Item>| v.into_iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_by_category(&items, Some("MDCAT"), ALL_TESTS, Item::category)), vec![1, 3]);
        assert_eq!(ids(filter_by_category(&items, Some(ALL_TESTS), ALL_TESTS, Item::category)), vec![1, 2, 3]);
        assert_eq!(ids(filter_by_category(&items, None, ALL_TESTS, Item::category)), vec![1, 2, 3]);
        assert!(filter_by_category(&items, Some("NAT"), ALL_TESTS, Item::category).is_empty());
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=25).collect();
        let third = page_slice(&items, 3, 10);
        assert_eq!(third.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(third.pagination.total_pages, 3);
        assert_eq!(third.pagination.total_items, 25);

        let first = page_slice(&items, 1, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());

        let clamped = page_slice(&items, 7, 10);
        assert_eq!(clamped.pagination.page, 3);
        assert_eq!(clamped.items.len(), 5);

        let empty = page_slice::<u32>(&[], 1, 10);
        assert!(empty.items.is_empty());
        assert_eq!(empty.pagination.total_pages, 1);
    }
}
