use super::tabs::{ContactTab, FacilitiesTab, OverviewTab, ProgramsTab};
use super::view_model::InstituteDetailsVm;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::link::Link;
use crate::shared::components::tab_bar::{TabBar, TabSpec};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::InstituteType;
use contracts::shared::text::{format_count, id_from_slug, DASH};
use leptos::prelude::*;
use thaw::*;

const TABS: &[TabSpec] = &[
    ("overview", "Overview", "file-text"),
    ("programs", "Programs", "book-open"),
    ("facilities", "Facilities", "building"),
    ("contact", "Contact", "phone"),
];

/// `/{type}/{slug}-{id}`: the backend id is the last dash-separated segment.
#[component]
pub fn InstituteDetail(kind: InstituteType, segment: String) -> impl IntoView {
    let vm = InstituteDetailsVm::new();
    vm.load(id_from_slug(&segment).to_string());

    view! {
        <PageFrame page_id="a001_institute--detail" category=PAGE_CAT_DETAIL>
            {move || {
                if vm.loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 48px; justify-content: center;">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }.into_any()
                } else if vm.institute.with(|i| i.is_some()) {
                    view! {
                        <Header vm=vm kind=kind />
                        <StatsBar vm=vm />
                        <div class="page__content page__tab-content">
                            <TabBar tabs=TABS active_tab=vm.active_tab />
                            <TabContent vm=vm />
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <EmptyState
                            title=format!("{} not found", kind.api_value())
                            message=vm.error.get().map(|e| e.to_string())
                        >
                            <Link href=format!("/{}", kind.route_slug()) class="button button--secondary">
                                {format!("Back to {}", kind.plural_name())}
                            </Link>
                        </EmptyState>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}

#[component]
fn Header(vm: InstituteDetailsVm, kind: InstituteType) -> impl IntoView {
    let Some(inst) = vm.institute.get_untracked() else {
        return view! { <></> }.into_any();
    };

    view! {
        <div class="page__hero">
            <Link href=format!("/{}", kind.route_slug()) class="page__back">
                {icon("arrow-left")}
                {format!("Back to {}", kind.plural_name())}
            </Link>
            <div class="page__hero-body">
                <div class="page__hero-logo">{inst.initials()}</div>
                <div class="page__hero-text">
                    <h1>{inst.institute_name.clone()}</h1>
                    <p class="page__hero-subtitle">
                        {inst.category.clone().or(inst.institute_type.clone()).unwrap_or_default()}
                    </p>
                    <div class="page__hero-meta">
                        <span>{icon("map-pin")}{inst.location().unwrap_or_else(|| DASH.to_string())}</span>
                        {inst.founded.clone().map(|f| view! {
                            <span>{icon("calendar")}{format!("Founded {f}")}</span>
                        })}
                        {inst.rating.map(|r| {
                            let reviews = inst.reviews.map(|n| format!(" ({} reviews)", format_count(n))).unwrap_or_default();
                            view! { <span>{icon("star")}{format!("{r:.1}{reviews}")}</span> }
                        })}
                        {inst.featured.then(|| view! { <Badge variant="warning".to_string()>"Featured"</Badge> })}
                    </div>
                </div>
                <div class="page__hero-actions">
                    <Link href="/admissions" class="button button--primary">"Apply Now"</Link>
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn StatsBar(vm: InstituteDetailsVm) -> impl IntoView {
    let stat = |value: Option<String>, label: &'static str| {
        view! {
            <div class="stats-bar__item">
                <div class="stats-bar__value">{value.unwrap_or_else(|| DASH.to_string())}</div>
                <div class="stats-bar__label">{label}</div>
            </div>
        }
    };

    let stats = vm.with_institute(|inst| {
        (
            inst.students.map(format_count),
            inst.faculty.map(format_count),
            inst.campuses.map(|c| c.to_string()),
            (!inst.programs.is_empty()).then(|| format!("{}+", inst.programs.len())),
        )
    });
    let (students, faculty, campuses, programs) = stats.unwrap_or_default();

    view! {
        <div class="stats-bar">
            {stat(students, "Students")}
            {stat(faculty, "Faculty")}
            {stat(campuses, "Campuses")}
            {stat(programs, "Programs")}
        </div>
    }
}

#[component]
fn TabContent(vm: InstituteDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        {move || match active_tab.get() {
            "programs" => view! { <ProgramsTab vm=vm /> }.into_any(),
            "facilities" => view! { <FacilitiesTab vm=vm /> }.into_any(),
            "contact" => view! { <ContactTab vm=vm /> }.into_any(),
            _ => view! { <OverviewTab vm=vm /> }.into_any(),
        }}
    }
}
