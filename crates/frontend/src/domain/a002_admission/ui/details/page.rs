use super::tabs::TabContent;
use crate::domain::a002_admission::api::fetch_by_id;
use crate::domain::a002_admission::ui::list::card::status_variant;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::link::Link;
use crate::shared::components::tab_bar::{TabBar, TabSpec};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_admission::Admission;
use contracts::shared::text::{format_short_date, or_dash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABS: &[TabSpec] = &[
    ("overview", "Overview", "file-text"),
    ("eligibility", "Eligibility", "check-circle"),
    ("process", "Process", "clock"),
    ("program", "Program", "book-open"),
    ("contact", "Contact", "phone"),
];

#[component]
pub fn AdmissionDetail(id: String) -> impl IntoView {
    let admission = RwSignal::new(None::<Admission>);
    let loading = RwSignal::new(true);
    let active_tab = RwSignal::new("overview");

    spawn_local(async move {
        match fetch_by_id(&id).await {
            Ok(a) => admission.set(Some(a)),
            Err(e) => log::warn!("admission {id} failed to load: {e}"),
        }
        loading.set(false);
    });

    view! {
        <PageFrame page_id="a002_admission--detail" category=PAGE_CAT_DETAIL>
            {move || {
                if loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 48px; justify-content: center;">
                            <Spinner />
                        </Flex>
                    }.into_any();
                }
                match admission.get() {
                    Some(a) => view! {
                        <Hero admission=a.clone() />
                        <div class="page__content page__tab-content">
                            <TabBar tabs=TABS active_tab=active_tab />
                            <TabContent admission=a active_tab=active_tab />
                        </div>
                    }.into_any(),
                    None => view! {
                        <EmptyState title="Admission not found">
                            <Link href="/admissions" class="button button--secondary">"Back to Admissions"</Link>
                        </EmptyState>
                    }.into_any(),
                }
            }}
        </PageFrame>
    }
}

#[component]
fn Hero(admission: Admission) -> impl IntoView {
    let status = admission.status_kind();
    let fee = admission.totalfee.clone().or_else(|| admission.fee.clone());

    view! {
        <div class="page__hero">
            <Link href="/admissions" class="page__back">
                {icon("arrow-left")}
                "Back to Admissions"
            </Link>
            <div class="page__hero-text">
                <h1>{admission.program.clone()}</h1>
                <p class="page__hero-subtitle">{admission.institute.clone()}</p>
                <div class="page__hero-meta">
                    {status.map(|s| view! { <Badge variant=status_variant(Some(s)).to_string()>{s.display_name()}</Badge> })}
                    <span>{icon("map-pin")}{or_dash(admission.city.as_deref())}</span>
                    <span>{icon("calendar")}{format!("Deadline: {}", format_short_date(admission.deadline.as_deref()))}</span>
                </div>
            </div>
            <div class="stats-bar">
                <div class="stats-bar__item">
                    <div class="stats-bar__value">{or_dash(admission.duration.as_deref())}</div>
                    <div class="stats-bar__label">"Duration"</div>
                </div>
                <div class="stats-bar__item">
                    <div class="stats-bar__value">{or_dash(admission.intake.as_deref())}</div>
                    <div class="stats-bar__label">"Intake"</div>
                </div>
                <div class="stats-bar__item">
                    <div class="stats-bar__value">{or_dash(fee.as_deref())}</div>
                    <div class="stats-bar__label">"Total Fee"</div>
                </div>
                <div class="stats-bar__item">
                    <div class="stats-bar__value">{or_dash(admission.seats.as_deref())}</div>
                    <div class="stats-bar__label">"Seats"</div>
                </div>
            </div>
        </div>
    }
}
