use crate::shared::components::link::Link;
use crate::shared::icons::icon;
use leptos::prelude::*;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/schools", "Schools"),
    ("/colleges", "Colleges"),
    ("/universities", "Universities"),
    ("/tests", "Tests"),
    ("/admissions", "Admissions"),
];

const RESOURCE_LINKS: &[(&str, &str)] = &[
    ("/blog", "Blog & Guides"),
    ("/compare", "Compare Institutes"),
    ("/contact", "Contact Us"),
];

pub const CONTACT_ADDRESS: &str = "Islamabad, Pakistan";
pub const CONTACT_PHONE: &str = "+92 300 1234567";
pub const CONTACT_EMAIL: &str = "info@beyondtaleem.pk";

fn link_list(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="footer__links">
            {links
                .iter()
                .map(|(href, label)| view! { <li><Link href=*href>{*label}</Link></li> })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <div class="footer__brand">
                        {icon("graduation-cap")}
                        <span>"Beyond Taleem"</span>
                    </div>
                    <p>
                        "Your comprehensive guide to educational institutes across Pakistan. "
                        "Explore, Compare, and Enroll with confidence."
                    </p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    {link_list(QUICK_LINKS)}
                </div>
                <div>
                    <h3>"Resources"</h3>
                    {link_list(RESOURCE_LINKS)}
                </div>
                <div>
                    <h3>"Contact Us"</h3>
                    <ul class="footer__contact">
                        <li>{icon("map-pin")}<span>{CONTACT_ADDRESS}</span></li>
                        <li>{icon("phone")}<span>{CONTACT_PHONE}</span></li>
                        <li>{icon("mail")}<span>{CONTACT_EMAIL}</span></li>
                    </ul>
                </div>
            </div>
            <div class="footer__bottom">
                <p>{format!("© {year} Beyond Taleem. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
