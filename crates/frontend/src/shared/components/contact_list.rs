use crate::shared::icons::icon;
use contracts::shared::text::{strip_scheme, DASH};
use leptos::prelude::*;

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Address, phone, email and website rows; missing values render as a dash.
#[component]
pub fn ContactList(
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
) -> impl IntoView {
    let dash = || view! { <span>{DASH}</span> }.into_any();

    let phone_view = match present(phone) {
        Some(p) => view! { <a href=format!("tel:{p}")>{p.clone()}</a> }.into_any(),
        None => dash(),
    };
    let email_view = match present(email) {
        Some(m) => view! { <a href=format!("mailto:{m}")>{m.clone()}</a> }.into_any(),
        None => dash(),
    };
    let website_view = match present(website) {
        Some(url) => {
            let label = strip_scheme(&url).to_string();
            view! { <a href=url target="_blank" rel="noopener noreferrer">{label}</a> }.into_any()
        }
        None => dash(),
    };

    view! {
        <ul class="contact-list">
            <li>{icon("map-pin")}<span>{present(address).unwrap_or_else(|| DASH.to_string())}</span></li>
            <li>{icon("phone")}{phone_view}</li>
            <li>{icon("mail")}{email_view}</li>
            <li>{icon("globe")}{website_view}</li>
        </ul>
    }
}
