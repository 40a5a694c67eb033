pub mod card;

use self::card::InstituteCard;
use crate::domain::a001_institute::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::FacetSelect;
use crate::shared::list_store::ListingStore;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_institute::dto::PAGE_SIZE;
use contracts::domain::a001_institute::Institute;
use contracts::enums::InstituteType;
use contracts::shared::listing::{FacetKey, FilterAction};
use leptos::prelude::*;
use thaw::*;

/// Schools, colleges or universities; one component for all three routes.
#[component]
pub fn InstituteList(kind: InstituteType) -> impl IntoView {
    let store = ListingStore::<Institute>::new(PAGE_SIZE);
    store.bind(move |filter| api::fetch_page(filter, kind));

    // The backend sometimes omits the city facet; keep the last list we saw.
    let cities = RwSignal::new(Vec::<String>::new());
    Effect::new(move |_| {
        let fresh = store.page.with(|p| p.facets.cities.clone());
        if !fresh.is_empty() {
            cities.set(fresh);
        }
    });

    let plural = kind.plural_name().to_lowercase();
    let summary = {
        let plural = plural.clone();
        move || {
            if store.loading.get() {
                "Loading institutes...".to_string()
            } else {
                store.page.with(|p| {
                    format!(
                        "Showing {} of {} {}",
                        p.items.len(),
                        p.pagination.total_items,
                        plural
                    )
                })
            }
        }
    };

    view! {
        <PageFrame page_id="a001_institute--list" category=PAGE_CAT_LIST>
            <PageHeader title=kind.list_title() subtitle=kind.list_subtitle().to_string() />

            <div class="page__content">
                <FilterPanel
                    active_filters_count=Signal::derive(move || store.filter.with(|f| f.active_filter_count()))
                    on_clear=move |_| store.dispatch(FilterAction::Clear)
                >
                    <div class="filter-grid">
                        <SearchInput
                            value=Signal::derive(move || store.filter.with(|f| f.search.clone()))
                            on_change=move |text: String| store.dispatch(FilterAction::SetSearch(text))
                            placeholder=format!("Search {plural}...")
                        />
                        <FacetSelect
                            value=Signal::derive(move || store.filter.with(|f| f.facet_or_all(FacetKey::City)))
                            options=cities
                            all_label="All Cities"
                            on_change=Callback::new(move |city: String| {
                                store.dispatch(FilterAction::SetFacet(FacetKey::City, city))
                            })
                        />
                    </div>
                </FilterPanel>

                <p class="list-summary">{summary}</p>

                <Show when=move || store.loading.get()>
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 24px;">
                        <Spinner />
                    </Flex>
                </Show>

                <div class="card-grid">
                    <For
                        each=move || store.page.with(|p| p.items.iter().cloned().enumerate().collect::<Vec<_>>())
                        key=|(_, inst)| inst.id.clone()
                        children=move |(i, inst)| view! {
                            <InstituteCard institute=inst fallback_kind=kind delay_ms=(i as u32) * 40 />
                        }
                    />
                </div>

                <Show when=move || !store.loading.get() && store.page.with(|p| p.items.is_empty())>
                    <EmptyState
                        title=format!("No {} found matching your criteria.", kind.plural_name().to_lowercase())
                    >
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| store.dispatch(FilterAction::Clear)
                        >
                            "Clear Filters"
                        </Button>
                    </EmptyState>
                </Show>

                <Show when=move || !store.loading.get()>
                    <PaginationControls
                        pager=store.pager()
                        on_prev=move |_| store.prev_page()
                        on_next=move |_| store.next_page()
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
