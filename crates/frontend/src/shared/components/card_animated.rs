//! CardAnimated: Thaw `Card` with the `card-appear` entrance animation.
//!
//! ```rust,ignore
//! {items.into_iter().enumerate().map(|(i, item)| view! {
//!     <CardAnimated delay_ms=(i as u32) * 60>
//!         <p>{item.title}</p>
//!     </CardAnimated>
//! }).collect_view()}
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] wrapped with the `card-appear` animation from `app.css`.
///
/// `delay_ms` staggers cards in a grid; `class` is added to the card root.
#[component]
pub fn CardAnimated(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
