use crate::shared::icons::icon;
use contracts::shared::listing::Pager;
use leptos::prelude::*;

/// Previous / "Page X of N" / Next.
///
/// Hidden entirely while there is a single page; the buttons are disabled at
/// either end and never wrap.
#[component]
pub fn PaginationControls(
    #[prop(into)] pager: Signal<Pager>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || pager.get().is_visible()>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_prev.run(())
                    disabled=move || pager.get().prev_disabled()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                    "Previous"
                </button>
                <span class="pagination-info">{move || pager.get().label()}</span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || pager.get().next_disabled()
                    title="Next page"
                >
                    "Next"
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}
