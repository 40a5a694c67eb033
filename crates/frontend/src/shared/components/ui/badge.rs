use leptos::prelude::*;

/// Pill label. Variants: "primary", "success", "warning", "error",
/// "outline", anything else renders neutral.
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_class(variant.get().as_deref().unwrap_or("neutral"));

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "outline" => "badge--outline",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class("warning"), "badge--warning");
        assert_eq!(badge_class("whatever"), "badge--neutral");
    }
}
