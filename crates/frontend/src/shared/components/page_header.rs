use leptos::prelude::*;

/// Title block at the top of listing and static pages.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    #[prop(optional, into)] subtitle: MaybeProp<String>,

    /// Right-hand actions (result counters, buttons)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
