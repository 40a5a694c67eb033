use crate::shared::components::link::Link;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--custom" category=PAGE_CAT_CUSTOM class="page--centered">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"The page you are looking for does not exist."</p>
            <Link href="/" class="button button--primary">"Go Home"</Link>
        </PageFrame>
    }
}
