use crate::layout::global_context::use_app_context;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::link::Link;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::enums::InstituteType;
use contracts::shared::text::format_count;
use leptos::prelude::*;
use thaw::*;

struct Featured {
    name: &'static str,
    kind: &'static str,
    city: &'static str,
    rating: f64,
    students: u64,
}

const FEATURED: &[Featured] = &[
    Featured {
        name: "NUST - National University of Sciences and Technology",
        kind: "Engineering University",
        city: "Islamabad",
        rating: 4.8,
        students: 15_000,
    },
    Featured {
        name: "Aga Khan University",
        kind: "Medical University",
        city: "Karachi",
        rating: 4.9,
        students: 8_000,
    },
    Featured {
        name: "LUMS - Lahore University of Management Sciences",
        kind: "Business University",
        city: "Lahore",
        rating: 4.7,
        students: 5_500,
    },
];

const STATS: &[(&str, &str)] = &[
    ("500+", "Universities"),
    ("1,200+", "Colleges"),
    ("5,000+", "Schools"),
    ("100+", "Cities"),
];

/// (name, date, category)
const UPCOMING_TESTS: &[(&str, &str, &str)] = &[
    ("MDCAT", "August 2025", "Medical"),
    ("ECAT", "July 2025", "Engineering"),
    ("NUST Entry Test", "June 2025", "Engineering"),
    ("IELTS", "Year Round", "Language"),
];

/// Link the hero search box leads to.
pub fn search_href(query: &str) -> String {
    let base = format!("/{}", InstituteType::University.route_slug());
    match query.trim() {
        "" => base,
        q => format!("{base}?search={}", urlencoding::encode(q)),
    }
}

fn category_icon(kind: InstituteType) -> &'static str {
    match kind {
        InstituteType::School => "school",
        InstituteType::College => "building",
        InstituteType::University => "graduation-cap",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(String::new());

    let search = move |_: leptos::ev::MouseEvent| ctx.navigate(&search_href(&query.get_untracked()));

    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <section class="hero">
                <h1 class="hero__title">"Find the Right Institute for Your Future"</h1>
                <p class="hero__subtitle">
                    "Schools, colleges, universities, admissions and entry tests across Pakistan in one place"
                </p>
                <Flex gap=FlexGap::Small class="hero__search">
                    <Input value=query placeholder="Search by institute name, city, or type..." />
                    <Button appearance=ButtonAppearance::Primary on_click=search>
                        {icon("search")}
                        "Search"
                    </Button>
                </Flex>
                <Flex gap=FlexGap::Small class="hero__actions">
                    <Link href="/universities" class="button button--primary">"Explore Universities"</Link>
                    <Link href="/admissions" class="button button--secondary">"Admissions Open"</Link>
                </Flex>
            </section>

            <section class="home-section">
                <div class="card-grid">
                    {InstituteType::all()
                        .into_iter()
                        .enumerate()
                        .map(|(i, kind)| view! {
                            <Link href=format!("/{}", kind.route_slug()) class="category-card__link">
                                <CardAnimated delay_ms=(i as u32) * 60 class="category-card">
                                    <span class="category-card__icon">{icon(category_icon(kind))}</span>
                                    <h3>{kind.plural_name()}</h3>
                                    <p>{kind.list_subtitle()}</p>
                                </CardAnimated>
                            </Link>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"Featured Institutes"</h2>
                <div class="card-grid">
                    {FEATURED
                        .iter()
                        .map(|f| view! {
                            <Link href=search_href(f.name.split(" - ").next().unwrap_or(f.name)) class="institute-card__link">
                                <CardAnimated class="institute-card">
                                    <Badge variant="warning".to_string()>"Featured"</Badge>
                                    <h3 class="institute-card__title">{f.name}</h3>
                                    <p class="text-muted">{f.kind}</p>
                                    <div class="institute-card__meta">{icon("map-pin")}<span>{f.city}</span></div>
                                    <div class="institute-card__meta">
                                        {icon("users")}<span>{format!("{} students", format_count(f.students))}</span>
                                    </div>
                                    <div class="institute-card__meta">{icon("star")}<span>{format!("{:.1}", f.rating)}</span></div>
                                </CardAnimated>
                            </Link>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="stats-bar">
                {STATS
                    .iter()
                    .map(|(value, label)| view! {
                        <div class="stats-bar__item">
                            <div class="stats-bar__value">{*value}</div>
                            <div class="stats-bar__label">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"Upcoming Tests"</h2>
                <div class="card-grid">
                    {UPCOMING_TESTS
                        .iter()
                        .map(|(name, date, category)| view! {
                            <Link href="/tests" class="test-card__link">
                                <CardAnimated class="test-card">
                                    <span class="test-card__icon">{icon("book-open")}</span>
                                    <h3 class="test-card__name">{*name}</h3>
                                    <Badge variant="outline".to_string()>{*category}</Badge>
                                    <div class="test-card__meta">{icon("calendar")}<span>{*date}</span></div>
                                </CardAnimated>
                            </Link>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Need help choosing?"</h2>
                <p>"Our team can guide you through admissions, tests and scholarships."</p>
                <Link href="/contact" class="button button--primary">"Contact Us"</Link>
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_href() {
        assert_eq!(search_href("  "), "/universities");
        assert_eq!(search_href("Aga Khan"), "/universities?search=Aga%20Khan");
    }
}
