pub mod card;

use self::card::AdmissionCard;
use crate::domain::a002_admission::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::FacetSelect;
use crate::shared::list_store::ListingStore;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_admission::dto::PAGE_SIZE;
use contracts::domain::a002_admission::Admission;
use contracts::shared::listing::{FacetKey, FilterAction};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AdmissionList() -> impl IntoView {
    let store = ListingStore::<Admission>::new(PAGE_SIZE);
    store.bind(api::fetch_page);

    let cities = Signal::derive(move || store.page.with(|p| p.facets.cities.clone()));
    let fields = Signal::derive(move || store.page.with(|p| p.facets.fields.clone()));

    let facet_select = move |key: FacetKey, options: Signal<Vec<String>>, all_label: &'static str| {
        view! {
            <FacetSelect
                value=Signal::derive(move || store.filter.with(|f| f.facet_or_all(key)))
                options=options
                all_label=all_label
                on_change=Callback::new(move |v: String| store.dispatch(FilterAction::SetFacet(key, v)))
            />
        }
    };

    view! {
        <PageFrame page_id="a002_admission--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Admissions Open"
                subtitle="Current admission announcements from institutes across Pakistan".to_string()
            />

            <div class="page__content">
                <FilterPanel
                    active_filters_count=Signal::derive(move || store.filter.with(|f| f.active_filter_count()))
                    on_clear=move |_| store.dispatch(FilterAction::Clear)
                >
                    <div class="filter-grid">
                        <SearchInput
                            value=Signal::derive(move || store.filter.with(|f| f.search.clone()))
                            on_change=move |text: String| store.dispatch(FilterAction::SetSearch(text))
                            placeholder="Search programs or institutes..."
                        />
                        {facet_select(FacetKey::City, cities, "All Cities")}
                        {facet_select(FacetKey::Field, fields, "All Fields")}
                    </div>
                </FilterPanel>

                <div class="filter-tags">
                    {move || {
                        store
                            .filter
                            .with(|f| [(FacetKey::City, f.city.clone()), (FacetKey::Field, f.field.clone())])
                            .into_iter()
                            .filter_map(|(key, value)| {
                                value.map(|v| view! {
                                    <FilterTag
                                        label=v
                                        on_remove=Callback::new(move |_| {
                                            store.dispatch(FilterAction::SetFacet(key, String::new()))
                                        })
                                    />
                                })
                            })
                            .collect_view()
                    }}
                </div>

                <p class="list-summary">
                    {move || store.page.with(|p| format!("{} admissions found", p.pagination.total_items))}
                </p>

                {move || {
                    if store.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 24px;">
                                <Spinner />
                                <span>"Loading admissions..."</span>
                            </Flex>
                        }.into_any()
                    } else if store.page.with(|p| p.items.is_empty()) {
                        view! {
                            <EmptyState
                                title="No admissions found"
                                message="Try a different search or clear the filters.".to_string()
                            >
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| store.dispatch(FilterAction::Clear)
                                >
                                    "Clear Filters"
                                </Button>
                            </EmptyState>
                        }.into_any()
                    } else {
                        view! {
                            <div class="card-list">
                                {store
                                    .page
                                    .with(|p| p.items.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, a)| view! { <AdmissionCard admission=a delay_ms=(i as u32) * 40 /> })
                                    .collect_view()}
                            </div>
                        }.into_any()
                    }
                }}

                <PaginationControls
                    pager=store.pager()
                    on_prev=move |_| store.prev_page()
                    on_next=move |_| store.next_page()
                />
            </div>
        </PageFrame>
    }
}
