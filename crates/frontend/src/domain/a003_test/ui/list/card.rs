use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::link::Link;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a003_test::EntryTest;
use contracts::shared::text::{format_short_date, or_dash};
use leptos::prelude::*;

#[component]
pub fn TestCard(test: EntryTest, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let href = format!("/tests/{}", test.id.as_str());
    let discipline = test.discipline();

    view! {
        <CardAnimated delay_ms=delay_ms class="test-card">
            <div class="test-card__head">
                <span class="test-card__icon">{icon(discipline.icon_name())}</span>
                <div>
                    <h3 class="test-card__name">{test.test_name.clone()}</h3>
                    <p class="test-card__full-name">{test.test_full_name.clone().unwrap_or_default()}</p>
                </div>
                {test.category().map(str::to_string).map(|c| view! { <Badge variant="primary".to_string()>{c}</Badge> })}
            </div>
            <div class="test-card__meta">
                <span>{icon("calendar")}{format!("Test date: {}", format_short_date(test.test_date.as_deref()))}</span>
                <span>{icon("clock")}{format!("Register by: {}", format_short_date(test.registration_deadline.as_deref()))}</span>
                <span>{icon("file-text")}{format!("Total marks: {}", or_dash(test.total_marks.as_deref()))}</span>
            </div>
            <Link href=href class="button button--primary">"View Details"</Link>
        </CardAnimated>
    }
}
