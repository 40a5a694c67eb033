pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page chrome shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
