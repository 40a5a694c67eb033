//! Eager-merge aggregation: pull every backend page of a listing into one
//! client-held collection.
//!
//! `EagerMerge` is a sans-IO state machine so the sequencing rules live here
//! and the caller only performs the requests it is told to.

use crate::domain::common::ListPage;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStep {
    Fetch(u32),
    Done,
}

#[derive(Debug, Clone)]
pub struct EagerMerge<T> {
    merged: Vec<T>,
    next_page: u32,
    total_pages: Option<u32>,
}

impl<T> Default for EagerMerge<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EagerMerge<T> {
    pub fn new() -> Self {
        Self {
            merged: Vec::new(),
            next_page: 1,
            total_pages: None,
        }
    }

    /// Page 1 first; its pagination fixes how many pages follow.
    pub fn next_step(&self) -> MergeStep {
        match self.total_pages {
            Some(total) if self.next_page > total => MergeStep::Done,
            _ => MergeStep::Fetch(self.next_page),
        }
    }

    /// Append the page requested by the last `Fetch` step.
    pub fn accept(&mut self, page: ListPage<T>) -> MergeStep {
        if self.total_pages.is_none() {
            self.total_pages = Some(page.pagination.total_pages.max(1));
        }
        self.merged.extend(page.items);
        self.next_page += 1;
        self.next_step()
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn merged_len(&self) -> usize {
        self.merged.len()
    }

    pub fn into_items(self) -> Vec<T> {
        self.merged
    }
}

/// Fetch pages strictly one after another and concatenate them in
/// page-then-item order. The first failing page aborts the whole merge.
pub async fn merge_all<T, E, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ListPage<T>, E>>,
{
    let mut merge = EagerMerge::new();
    while let MergeStep::Fetch(page) = merge.next_step() {
        let fetched = fetch_page(page).await?;
        merge.accept(fetched);
    }
    Ok(merge.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{FilterFacets, Pagination};
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::RefCell;

    fn mock_page(page: u32, count: usize, total_pages: u32) -> ListPage<(u32, usize)> {
        ListPage {
            items: (0..count).map(|i| (page, i)).collect(),
            pagination: Pagination {
                page,
                limit: 10,
                total_pages,
                total_items: 25,
            },
            facets: FilterFacets::default(),
        }
    }

    #[test]
    fn test_state_machine_sequence() {
        let mut merge = EagerMerge::new();
        assert_eq!(merge.next_step(), MergeStep::Fetch(1));
        assert_eq!(merge.accept(mock_page(1, 10, 3)), MergeStep::Fetch(2));
        assert_eq!(merge.total_pages(), Some(3));
        assert_eq!(merge.accept(mock_page(2, 10, 3)), MergeStep::Fetch(3));
        assert_eq!(merge.accept(mock_page(3, 5, 3)), MergeStep::Done);
        assert_eq!(merge.merged_len(), 25);
    }

    #[test]
    fn test_merge_all_preserves_page_then_item_order() {
        let counts = [10usize, 10, 5];
        let requested = RefCell::new(Vec::new());
        let merged = block_on(merge_all(|page| {
            requested.borrow_mut().push(page);
            ready(Ok::<_, String>(mock_page(page, counts[page as usize - 1], 3)))
        }))
        .unwrap();

        assert_eq!(merged.len(), 25);
        assert_eq!(*requested.borrow(), vec![1, 2, 3]);
        let mut expected = Vec::new();
        for (idx, count) in counts.iter().enumerate() {
            for i in 0..*count {
                expected.push((idx as u32 + 1, i));
            }
        }
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_single_page_backend() {
        let merged = block_on(merge_all(|page| ready(Ok::<_, String>(mock_page(page, 4, 1)))))
            .unwrap();
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_failure_discards_merged_pages() {
        let calls = RefCell::new(0u32);
        let result = block_on(merge_all(|page| {
            *calls.borrow_mut() += 1;
            if page == 2 {
                ready(Err("page 2 failed".to_string()))
            } else {
                ready(Ok(mock_page(page, 10, 3)))
            }
        }));
        assert_eq!(result, Err("page 2 failed".to_string()));
        assert_eq!(*calls.borrow(), 2);
    }
}
