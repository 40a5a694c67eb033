use crate::routes::routes::AppRoute;
use leptos::prelude::*;
use web_sys::window;

/// Location state of the single-page app.
///
/// `path` drives the route switch; the query string belongs to whichever
/// listing page is mounted and is rewritten in place with `replace_state`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub path: RwSignal<String>,
    pub menu_open: RwSignal<bool>,
    /// Bumped on every navigation, including moves that keep the pathname
    /// and only change or drop the query string.
    pub location_seq: RwSignal<u64>,
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self::at(&current_pathname())
    }

    pub fn at(path: &str) -> Self {
        Self {
            path: RwSignal::new(path.to_string()),
            menu_open: RwSignal::new(false),
            location_seq: RwSignal::new(0),
        }
    }

    /// Record that the browser now shows `path`.
    pub fn set_location(&self, path: &str) {
        if self.path.get_untracked() != path {
            self.path.set(path.to_string());
        }
        self.location_seq.update(|n| *n += 1);
    }

    pub fn route(&self) -> Memo<AppRoute> {
        let path = self.path;
        Memo::new(move |_| AppRoute::parse(&path.get()))
    }

    /// Keep `path` in sync with back/forward navigation.
    pub fn init_router_integration(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            this.set_location(&current_pathname());
        });
    }

    /// Push a new history entry and switch the mounted page.
    pub fn navigate(&self, href: &str) {
        let (path, _) = href.split_once('?').unwrap_or((href, ""));
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
                {
                    log::warn!("push_state failed for {href}: {e:?}");
                }
            }
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.menu_open.set(false);
        self.set_location(path);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_navigation_is_observable() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::at("/universities");
            let route = ctx.route();
            let before = ctx.location_seq.get_untracked();

            ctx.set_location("/universities");
            assert_eq!(route.get_untracked(), AppRoute::parse("/universities"));
            assert_eq!(ctx.location_seq.get_untracked(), before + 1);

            ctx.set_location("/colleges");
            assert_eq!(ctx.path.get_untracked(), "/colleges");
            assert_eq!(ctx.location_seq.get_untracked(), before + 2);
        });
    }
}
