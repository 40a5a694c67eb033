use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::empty_state::NotAvailable;
use crate::shared::icons::icon;
use contracts::domain::a003_test::EntryTest;
use contracts::shared::text::{format_short_date, or_dash};
use leptos::prelude::*;

fn text_list(items: Vec<&str>, what: &'static str, icon_name: &'static str) -> AnyView {
    if items.is_empty() {
        return view! { <NotAvailable what=what /> }.into_any();
    }
    view! {
        <ul class="check-list">
            {items
                .into_iter()
                .map(|item| view! { <li>{icon(icon_name)}<span>{item.to_string()}</span></li> })
                .collect_view()}
        </ul>
    }
    .into_any()
}

fn overview(test: &EntryTest) -> AnyView {
    let about = test
        .test_overview
        .clone()
        .unwrap_or_else(|| "No overview available.".to_string());
    let facts = [
        ("Type", or_dash(test.test_type.as_deref())),
        ("Test Date", format_short_date(test.test_date.as_deref())),
        ("Registration Deadline", format_short_date(test.registration_deadline.as_deref())),
        ("Duration", or_dash(test.duration.as_deref())),
        ("Total Marks", or_dash(test.total_marks.as_deref())),
        ("Passing Marks", or_dash(test.passing_marks.as_deref())),
        ("Registration Fee", or_dash(test.registration_fee.as_deref())),
    ];
    view! {
        <div class="detail-grid">
            <CardAnimated class="detail-card">
                <h3>"About the Test"</h3>
                <p>{about}</p>
            </CardAnimated>
            <CardAnimated delay_ms=60 class="detail-card">
                <h3>"Key Information"</h3>
                <dl class="fact-list">
                    {facts
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
            </CardAnimated>
        </div>
    }
    .into_any()
}

fn structure(test: &EntryTest) -> AnyView {
    if test.test_structure.is_empty() {
        return view! { <NotAvailable what="structure details" /> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr><th>"Section"</th><th>"Questions"</th><th>"Marks"</th></tr>
            </thead>
            <tbody>
                {test
                    .test_structure
                    .iter()
                    .map(|s| view! {
                        <tr>
                            <td>{or_dash(s.name.as_deref())}</td>
                            <td>{or_dash(s.questions.as_deref())}</td>
                            <td>{or_dash(s.marks.as_deref())}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

fn important_dates(test: &EntryTest) -> AnyView {
    if test.test_important_dates.is_empty() {
        return view! { <NotAvailable what="dates" /> }.into_any();
    }
    view! {
        <ul class="timeline">
            {test
                .test_important_dates
                .iter()
                .map(|d| view! {
                    <li class="timeline__item">
                        {icon("calendar")}
                        <span class="timeline__event">{or_dash(d.event.as_deref())}</span>
                        <span class="timeline__date">{format_short_date(d.date.as_deref())}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
pub fn TestTabContent(test: EntryTest, active_tab: RwSignal<&'static str>) -> impl IntoView {
    move || {
        let (title, body) = match active_tab.get() {
            "structure" => ("Test Structure", structure(&test)),
            "syllabus" => ("Syllabus", text_list(test.syllabus(), "syllabus details", "book-open")),
            "eligibility" => (
                "Eligibility Criteria",
                text_list(test.eligibility(), "eligibility criteria", "check-circle"),
            ),
            "preparation" => (
                "Preparation Tips",
                text_list(test.preparation(), "preparation tips", "award"),
            ),
            "dates" => ("Important Dates", important_dates(&test)),
            _ => return overview(&test),
        };
        view! {
            <CardAnimated class="detail-card">
                <h3>{title}</h3>
                {body}
            </CardAnimated>
        }
        .into_any()
    }
}
