pub mod card;

use self::card::TestCard;
use crate::domain::a003_test::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::url_state::{follow_location, read_listing_filter, write_listing_filter};
use contracts::domain::a003_test::dto::PAGE_SIZE;
use contracts::domain::a003_test::{EntryTest, ALL_TESTS};
use contracts::shared::listing::{
    category_facets, filter_by_category, page_slice, reduce, FacetKey, FilterAction, Pager,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Tests are merged from every backend page once per mount, then filtered
/// and paged on the client.
#[component]
pub fn TestList() -> impl IntoView {
    // Only the category facet applies here; stray listing params are dropped.
    let filter = RwSignal::new(read_listing_filter().category_only());
    follow_location(filter, |f| f.category_only());
    let all_tests = RwSignal::new(Vec::<EntryTest>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match api::fetch_all().await {
            Ok(tests) => {
                log::debug!("merged {} tests", tests.len());
                all_tests.set(tests);
            }
            Err(e) => {
                log::warn!("tests listing failed: {e}");
                all_tests.set(Vec::new());
            }
        }
        loading.set(false);
    });

    Effect::new(move |_| filter.with(write_listing_filter));

    let dispatch = move |action: FilterAction| {
        let current = filter.get_untracked();
        let next = reduce(&current, action);
        if next != current {
            filter.set(next);
        }
    };

    let facets = Memo::new(move |_| all_tests.with(|t| category_facets(t, EntryTest::category, ALL_TESTS)));
    let visible = Memo::new(move |_| {
        let (category, page) = filter.with(|f| (f.category.clone(), f.page));
        all_tests.with(|t| {
            let filtered = filter_by_category(t, category.as_deref(), ALL_TESTS, EntryTest::category);
            page_slice(&filtered, page, PAGE_SIZE)
        })
    });
    let pager = Signal::derive(move || visible.with(|p| Pager::from_pagination(&p.pagination)));

    Effect::new(move |_| {
        if !loading.get() {
            let total_pages = visible.with(|p| p.pagination.total_pages);
            dispatch(FilterAction::ClampPage { total_pages });
        }
    });

    let selected = move || filter.with(|f| f.category.clone().unwrap_or_else(|| ALL_TESTS.to_string()));

    view! {
        <PageFrame page_id="a003_test--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Entry Tests"
                subtitle="Schedules, syllabi and preparation guides for admission tests".to_string()
            />

            <div class="page__content">
                <Flex gap=FlexGap::Small class="chip-bar">
                    <For
                        each=move || facets.get()
                        key=|facet| (facet.name.clone(), facet.count)
                        children=move |facet| {
                            let name = facet.name.clone();
                            let is_active = {
                                let name = name.clone();
                                move || selected() == name
                            };
                            view! {
                                <Button
                                    appearance=Signal::derive(move || {
                                        if is_active() { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                                    })
                                    size=ButtonSize::Small
                                    on_click=move |_| {
                                        let value = if name == ALL_TESTS { String::new() } else { name.clone() };
                                        dispatch(FilterAction::SetFacet(FacetKey::Category, value));
                                    }
                                >
                                    {format!("{} ({})", facet.name, facet.count)}
                                </Button>
                            }
                        }
                    />
                </Flex>

                {move || {
                    if loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 24px;">
                                <Spinner />
                                <span>"Loading tests..."</span>
                            </Flex>
                        }.into_any()
                    } else if visible.with(|p| p.items.is_empty()) {
                        view! {
                            <EmptyState title="No tests found">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| dispatch(FilterAction::Clear)
                                >
                                    "Clear Filters"
                                </Button>
                            </EmptyState>
                        }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {visible
                                    .get()
                                    .items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, t)| view! { <TestCard test=t delay_ms=(i as u32) * 40 /> })
                                    .collect_view()}
                            </div>
                        }.into_any()
                    }
                }}

                <PaginationControls
                    pager=pager
                    on_prev=move |_| {
                        if let Some(page) = pager.get_untracked().prev() {
                            dispatch(FilterAction::GoToPage(page));
                        }
                    }
                    on_next=move |_| {
                        if let Some(page) = pager.get_untracked().next() {
                            dispatch(FilterAction::GoToPage(page));
                        }
                    }
                />
            </div>
        </PageFrame>
    }
}
