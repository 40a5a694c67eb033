use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder shown when a list or a detail lookup comes back empty.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] message: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__icon">{icon("search")}</span>
            <h3 class="empty-state__title">{title}</h3>
            {move || message.get().map(|m| view! { <p class="empty-state__message">{m}</p> })}
            {children.map(|c| c())}
        </div>
    }
}

/// One-line "not available" note for an empty detail sub-list.
#[component]
pub fn NotAvailable(#[prop(into)] what: String) -> impl IntoView {
    view! { <p class="text-muted">{format!("No {what} available.")}</p> }
}
