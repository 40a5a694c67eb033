//! The listing filter lives in the address bar: read once on mount,
//! rewritten in place (no new history entry) on every change.

use crate::layout::global_context::use_app_context;
use contracts::shared::listing::{from_query_string, to_query_string, ListingFilter};
use leptos::prelude::*;
use web_sys::window;

pub fn read_listing_filter() -> ListingFilter {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    from_query_string(&search)
}

pub fn write_listing_filter(filter: &ListingFilter) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let current = location.search().unwrap_or_default();
    let query = to_query_string(filter);
    let wanted = if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    };

    // Only update URL if it actually changed
    if current == wanted {
        return;
    }
    if let Ok(history) = w.history() {
        let new_url = format!("{pathname}{wanted}");
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

/// A navigation landed on the page that is already mounted.
fn landed_on_mounted(seen: Option<u64>, seq: u64, mounted_path: &str, current_path: &str) -> bool {
    seen.is_some_and(|s| s != seq) && mounted_path == current_path
}

/// Re-seed `filter` from the address bar when the user navigates to the
/// listing that is already shown (navbar link, back/forward). Such moves
/// keep the route, so the page is not remounted.
pub fn follow_location(filter: RwSignal<ListingFilter>, project: fn(ListingFilter) -> ListingFilter) {
    let ctx = use_app_context();
    let mounted_path = ctx.path.get_untracked();

    Effect::new(move |seen: Option<u64>| {
        let seq = ctx.location_seq.get();
        if landed_on_mounted(seen, seq, &mounted_path, &ctx.path.get_untracked()) {
            let fresh = project(read_listing_filter());
            if fresh != filter.get_untracked() {
                log::debug!("listing filter re-read from the address bar");
                filter.set(fresh);
            }
        }
        seq
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landed_on_mounted() {
        assert!(!landed_on_mounted(None, 0, "/universities", "/universities"));
        assert!(landed_on_mounted(Some(0), 1, "/universities", "/universities"));
        assert!(!landed_on_mounted(Some(1), 1, "/universities", "/universities"));
        assert!(!landed_on_mounted(Some(0), 1, "/universities", "/colleges"));
    }
}
