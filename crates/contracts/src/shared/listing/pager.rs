use crate::domain::common::Pagination;

/// Previous/Next control state derived from backend pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn from_pagination(p: &Pagination) -> Self {
        Self::new(p.page, p.total_pages)
    }

    pub fn prev_disabled(&self) -> bool {
        self.page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page == self.total_pages
    }

    pub fn prev(&self) -> Option<u32> {
        (!self.prev_disabled()).then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (!self.next_disabled()).then(|| self.page + 1)
    }

    /// Controls are only rendered when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_at_bounds() {
        for n in 1..=4u32 {
            for page in 1..=n {
                let pager = Pager::new(page, n);
                assert_eq!(pager.prev_disabled(), page == 1);
                assert_eq!(pager.next_disabled(), page == n);
            }
        }
    }

    #[test]
    fn test_no_wrap_around() {
        let pager = Pager::new(1, 3);
        assert_eq!(pager.prev(), None);
        assert_eq!(pager.next(), Some(2));
        let pager = Pager::new(3, 3);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.prev(), Some(2));
    }

    #[test]
    fn test_clamps_out_of_range() {
        let pager = Pager::new(9, 3);
        assert_eq!(pager.page, 3);
        let pager = Pager::new(0, 0);
        assert_eq!((pager.page, pager.total_pages), (1, 1));
        assert!(!pager.is_visible());
        assert_eq!(Pager::new(2, 5).label(), "Page 2 of 5");
    }

    #[test]
    fn test_prev_from_deep_link_moves_shown_page() {
        use crate::shared::listing::{page_slice, reduce, FilterAction, ListingFilter};

        let items: Vec<u32> = (0..15).collect();
        let filter = ListingFilter {
            page: 5,
            ..Default::default()
        };
        let shown = Pager::from_pagination(&page_slice(&items, filter.page, 10).pagination);
        assert_eq!(shown, Pager::new(2, 2));

        let target = shown.prev().unwrap();
        let filter = reduce(&filter, FilterAction::GoToPage(target));
        let after = Pager::from_pagination(&page_slice(&items, filter.page, 10).pagination);
        assert_eq!(after.page, 1);
        assert_ne!(after, shown);

        let clamped = reduce(
            &ListingFilter { page: 5, ..Default::default() },
            FilterAction::ClampPage { total_pages: shown.total_pages },
        );
        assert_eq!(clamped.page, 2);
    }

    #[test]
    fn test_from_empty_pagination() {
        let pager = Pager::from_pagination(&Pagination::empty(10));
        assert!(pager.prev_disabled());
        assert!(pager.next_disabled());
    }
}
