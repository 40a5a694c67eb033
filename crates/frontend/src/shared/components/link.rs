use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// In-app anchor: plain clicks switch the route through history, modified
/// clicks (new tab, new window) are left to the browser.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let target = href.clone();

    view! {
        <a
            href=href
            class=move || class.get().unwrap_or_default()
            on:click=move |ev: leptos::ev::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
