use crate::shared::icons::icon;
use leptos::prelude::*;

/// Filter bar above a listing: title, active-filter badge, clear button and
/// the filter inputs themselves.
#[component]
pub fn FilterPanel(
    #[prop(into)] active_filters_count: Signal<usize>,

    #[prop(into)] on_clear: Callback<()>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <button class="link-button" on:click=move |_| on_clear.run(())>
                            "Clear filters"
                        </button>
                    </Show>
                </div>
            </div>
            <div class="filter-panel-content">
                {children()}
            </div>
        </div>
    }
}

/// Active filter chip.
#[component]
pub fn FilterTag(
    #[prop(into)] label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
