use super::tabs::TestTabContent;
use crate::domain::a003_test::api::fetch_by_id;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::link::Link;
use crate::shared::components::tab_bar::{TabBar, TabSpec};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_test::EntryTest;
use contracts::shared::api_error::ApiError;
use contracts::shared::text::{format_short_date, or_dash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABS: &[TabSpec] = &[
    ("overview", "Overview", "file-text"),
    ("structure", "Structure", "book-open"),
    ("syllabus", "Syllabus", "book-open"),
    ("eligibility", "Eligibility", "check-circle"),
    ("preparation", "Preparation", "award"),
    ("dates", "Important Dates", "calendar"),
];

#[component]
pub fn TestDetail(id: String) -> impl IntoView {
    let test = RwSignal::new(None::<EntryTest>);
    let error = RwSignal::new(None::<ApiError>);
    let loading = RwSignal::new(true);
    let active_tab = RwSignal::new("overview");

    spawn_local(async move {
        match fetch_by_id(&id).await {
            Ok(t) => test.set(Some(t)),
            Err(e) => {
                log::warn!("test {id} failed to load: {e}");
                error.set(Some(e));
            }
        }
        loading.set(false);
    });

    view! {
        <PageFrame page_id="a003_test--detail" category=PAGE_CAT_DETAIL>
            {move || {
                if loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 48px; justify-content: center;">
                            <Spinner />
                        </Flex>
                    }.into_any();
                }
                let Some(t) = test.get() else {
                    let message = error.get().filter(|e| !e.is_not_found()).map(|e| e.to_string());
                    return view! {
                        <EmptyState title="Test not found" message=message>
                            <Link href="/tests" class="button button--secondary">"Back to Tests"</Link>
                        </EmptyState>
                    }.into_any();
                };
                view! {
                    <TestHero test=t.clone() />
                    <div class="page__content page__tab-content">
                        <TabBar tabs=TABS active_tab=active_tab />
                        <TestTabContent test=t active_tab=active_tab />
                    </div>
                }.into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn TestHero(test: EntryTest) -> impl IntoView {
    let facts = [
        ("calendar", "Test Date", format_short_date(test.test_date.as_deref())),
        ("clock", "Duration", or_dash(test.duration.as_deref())),
        ("file-text", "Total Marks", or_dash(test.total_marks.as_deref())),
        ("award", "Registration Fee", or_dash(test.registration_fee.as_deref())),
    ];

    view! {
        <div class="page__hero">
            <Link href="/tests" class="page__back">
                {icon("arrow-left")}
                "Back to Tests"
            </Link>
            <div class="page__hero-body">
                <div class="page__hero-logo">{icon(test.discipline().icon_name())}</div>
                <div class="page__hero-text">
                    <h1>{test.test_name.clone()}</h1>
                    <p class="page__hero-subtitle">{test.test_full_name.clone().unwrap_or_default()}</p>
                    {test.category().map(str::to_string).map(|c| view! { <Badge variant="primary".to_string()>{c}</Badge> })}
                </div>
                {test.official_website.clone().filter(|w| !w.is_empty()).map(|site| view! {
                    <div class="page__hero-actions">
                        <a class="button button--primary" href=site target="_blank" rel="noopener noreferrer">
                            "Official Website"
                        </a>
                    </div>
                })}
            </div>
            <div class="stats-bar">
                {facts
                    .into_iter()
                    .map(|(icon_name, label, value)| view! {
                        <div class="stats-bar__item">
                            <span class="stats-bar__icon">{icon(icon_name)}</span>
                            <div class="stats-bar__value">{value}</div>
                            <div class="stats-bar__label">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
