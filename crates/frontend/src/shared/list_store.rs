use crate::shared::url_state::{follow_location, read_listing_filter, write_listing_filter};
use contracts::domain::common::ListPage;
use contracts::shared::api_error::ApiError;
use contracts::shared::listing::{reduce, FilterAction, ListingFilter, Pager, RequestSequencer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Reactive state of one backend-paginated listing page.
///
/// The filter is seeded from the URL, every change is written back to it and
/// triggers exactly one request. Only the response to the newest request is
/// applied; failures collapse into an empty page.
pub struct ListingStore<T: Send + Sync + 'static> {
    pub filter: RwSignal<ListingFilter>,
    pub page: RwSignal<ListPage<T>>,
    pub loading: RwSignal<bool>,
    sequencer: StoredValue<RequestSequencer>,
    limit: u32,
}

impl<T: Send + Sync + 'static> Clone for ListingStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListingStore<T> {}

impl<T: Clone + Send + Sync + 'static> ListingStore<T> {
    /// Seeded from the address bar and re-seeded on same-page navigation.
    pub fn new(limit: u32) -> Self {
        let store = Self::with_filter(limit, read_listing_filter());
        follow_location(store.filter, |f| f);
        store
    }

    pub fn with_filter(limit: u32, filter: ListingFilter) -> Self {
        Self {
            filter: RwSignal::new(filter),
            page: RwSignal::new(ListPage::empty(limit)),
            loading: RwSignal::new(false),
            sequencer: StoredValue::new(RequestSequencer::new()),
            limit,
        }
    }

    fn sequencer(&self) -> RequestSequencer {
        self.sequencer.get_value()
    }

    /// Start fetching: once now and again after every filter change.
    pub fn bind<F, Fut>(self, fetch: F)
    where
        F: Fn(ListingFilter) -> Fut + 'static,
        Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
    {
        // Responses may land after the page unmounted; the sequencer must
        // outlive the reactive owner.
        let sequencer = self.sequencer();
        Effect::new(move |_| {
            let filter = self.filter.get();
            write_listing_filter(&filter);

            let ticket = sequencer.issue();
            self.loading.set(true);
            let request = fetch(filter);
            let sequencer = sequencer.clone();
            spawn_local(async move {
                let result = request.await;
                match sequencer.accept(ticket, result) {
                    Some(result) => self.apply(result),
                    None => log::debug!("dropping stale listing response {ticket:?}"),
                }
            });
        });
    }

    /// Apply an accepted response. A no-op once the page is gone.
    fn apply(&self, result: Result<ListPage<T>, ApiError>) {
        let (page, total_pages) = match result {
            Ok(page) => {
                let total_pages = page.pagination.total_pages;
                (page, Some(total_pages))
            }
            Err(e) => {
                log::warn!("listing request failed: {e}");
                (ListPage::empty(self.limit), None)
            }
        };
        if self.page.try_set(page).is_some() {
            log::debug!("listing unmounted before its response arrived");
            return;
        }
        let _ = self.loading.try_set(false);
        if let Some(total_pages) = total_pages {
            self.dispatch(FilterAction::ClampPage { total_pages });
        }
    }

    pub fn dispatch(&self, action: FilterAction) {
        let Some(current) = self.filter.try_get_untracked() else {
            return;
        };
        let next = reduce(&current, action);
        if next != current {
            self.filter.set(next);
        }
    }

    fn shown_pager(&self) -> Pager {
        self.page.with_untracked(|p| Pager::from_pagination(&p.pagination))
    }

    /// Step back from the page on screen, not from the requested one.
    pub fn prev_page(&self) {
        if let Some(page) = self.shown_pager().prev() {
            self.dispatch(FilterAction::GoToPage(page));
        }
    }

    pub fn next_page(&self) {
        if let Some(page) = self.shown_pager().next() {
            self.dispatch(FilterAction::GoToPage(page));
        }
    }

    pub fn pager(&self) -> Signal<Pager> {
        let page = self.page;
        Signal::derive(move || page.with(|p| Pager::from_pagination(&p.pagination)))
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.items.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Pagination;

    fn page_of(page: u32, total_pages: u32) -> ListPage<u32> {
        let mut p = ListPage::empty(10);
        p.items = vec![1, 2, 3];
        p.pagination = Pagination {
            page,
            total_pages,
            ..p.pagination
        };
        p
    }

    #[test]
    fn test_late_response_after_unmount_is_ignored() {
        let owner = Owner::new();
        let (store, sequencer) = owner.with(|| {
            let store = ListingStore::<u32>::with_filter(5, ListingFilter::default());
            (store, store.sequencer())
        });
        let ticket = sequencer.issue();
        drop(owner);

        let accepted = sequencer.accept(ticket, Ok(ListPage::empty(5)));
        assert!(accepted.is_some());
        if let Some(result) = accepted {
            store.apply(result);
        }
    }

    #[test]
    fn test_prev_steps_from_shown_page() {
        let owner = Owner::new();
        owner.with(|| {
            let filter = ListingFilter {
                page: 5,
                ..ListingFilter::default()
            };
            let store = ListingStore::<u32>::with_filter(10, filter);
            store.apply(Ok(page_of(2, 2)));
            assert_eq!(store.filter.get_untracked().page, 2);

            store.prev_page();
            assert_eq!(store.filter.get_untracked().page, 1);
            store.prev_page();
            assert_eq!(store.filter.get_untracked().page, 1);
        });
    }

    #[test]
    fn test_failed_request_empties_page() {
        let owner = Owner::new();
        owner.with(|| {
            let store = ListingStore::<u32>::with_filter(10, ListingFilter::default());
            store.loading.set(true);
            store.apply(Err(ApiError::Network("down".into())));
            assert!(store.page.with_untracked(|p| p.items.is_empty()));
            assert!(!store.loading.get_untracked());
        });
    }
}
