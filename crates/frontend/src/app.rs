use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Current location, shared by the navbar, links and the route switch.
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <ConfigProvider>
            <Shell>
                <AppRoutes />
            </Shell>
        </ConfigProvider>
    }
}
