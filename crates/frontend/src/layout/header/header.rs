use crate::layout::global_context::use_app_context;
use crate::shared::components::link::Link;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top-level navigation: (path, label).
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/schools", "Schools"),
    ("/colleges", "Colleges"),
    ("/universities", "Universities"),
    ("/tests", "Tests"),
    ("/admissions", "Admissions"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let route = ctx.route();
    let menu_open = ctx.menu_open;

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|(path, label)| {
                let path = *path;
                let class = move || {
                    if route.get().section() == Some(path) {
                        "navbar__item navbar__item--active"
                    } else {
                        "navbar__item"
                    }
                };
                view! {
                    <span class=class>
                        <Link href=path class="navbar__link">{*label}</Link>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <header data-zone="header" class="navbar">
            <div class="navbar__content">
                <Link href="/" class="navbar__brand">
                    <span class="navbar__logo">{icon("graduation-cap")}</span>
                    <span class="navbar__title">"Beyond Taleem"</span>
                </Link>

                <nav class=move || {
                    if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }
                }>
                    {nav_links}
                    <Link href="/compare" class="button button--primary navbar__compare">
                        "Compare"
                    </Link>
                </nav>

                <button
                    class="button button--ghost navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </header>
    }
}
