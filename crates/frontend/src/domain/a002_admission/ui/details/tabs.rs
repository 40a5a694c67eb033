use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::contact_list::ContactList;
use crate::shared::components::empty_state::NotAvailable;
use crate::shared::icons::icon;
use contracts::domain::a002_admission::Admission;
use contracts::shared::text::{format_short_date, or_dash};
use leptos::prelude::*;

fn bullet_list(items: &[String], what: &'static str) -> AnyView {
    if items.is_empty() {
        return view! { <NotAvailable what=what /> }.into_any();
    }
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| view! { <li>{icon("check-circle")}<span>{item.clone()}</span></li> })
                .collect_view()}
        </ul>
    }
    .into_any()
}

fn numbered_steps(items: &[String]) -> AnyView {
    if items.is_empty() {
        return view! { <NotAvailable what="process details" /> }.into_any();
    }
    view! {
        <ol class="step-list">
            {items
                .iter()
                .enumerate()
                .map(|(i, step)| view! {
                    <li class="step-list__item">
                        <span class="step-list__number">{i + 1}</span>
                        <span>{step.clone()}</span>
                    </li>
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}

#[component]
pub fn TabContent(admission: Admission, active_tab: RwSignal<&'static str>) -> impl IntoView {
    move || match active_tab.get() {
        "eligibility" => {
            let criteria = bullet_list(&admission.eligibility, "eligibility criteria");
            let documents = bullet_list(&admission.requirements, "document requirements");
            view! {
                <div class="detail-grid">
                    <CardAnimated class="detail-card">
                        <h3>"Eligibility Criteria"</h3>
                        {criteria}
                    </CardAnimated>
                    <CardAnimated delay_ms=60 class="detail-card">
                        <h3>"Required Documents"</h3>
                        {documents}
                    </CardAnimated>
                </div>
            }
            .into_any()
        }
        "process" => {
            let steps = numbered_steps(&admission.admissionprocess);
            view! {
                <CardAnimated class="detail-card">
                    <h3>"Admission Process"</h3>
                    {steps}
                </CardAnimated>
            }
            .into_any()
        }
        "program" => {
            let details = bullet_list(&admission.programdetails, "program details");
            let careers = bullet_list(&admission.careeropportunities, "career details");
            view! {
                <div class="detail-grid">
                    <CardAnimated class="detail-card">
                        <h3>"Program Details"</h3>
                        {details}
                    </CardAnimated>
                    <CardAnimated delay_ms=60 class="detail-card">
                        <h3>"Career Opportunities"</h3>
                        {careers}
                    </CardAnimated>
                </div>
            }
            .into_any()
        }
        "contact" => {
            let address = admission.address.clone().or_else(|| admission.city.clone());
            let phone = admission.phone.clone();
            let email = admission.email.clone();
            let website = admission.website.clone();
            view! {
                <CardAnimated class="detail-card">
                    <h3>"Contact Information"</h3>
                    <ContactList address=address phone=phone email=email website=website />
                </CardAnimated>
            }
            .into_any()
        }
        _ => {
            let facts = [
                ("Institute", admission.institute.clone()),
                ("Program", admission.program.clone()),
                ("Field", or_dash(admission.field.as_deref())),
                ("City", or_dash(admission.city.as_deref())),
                ("Duration", or_dash(admission.duration.as_deref())),
                ("Intake", or_dash(admission.intake.as_deref())),
                ("Fee", or_dash(admission.fee.as_deref())),
                ("Seats", or_dash(admission.seats.as_deref())),
                ("Deadline", format_short_date(admission.deadline.as_deref())),
            ];
            view! {
                <CardAnimated class="detail-card">
                    <h3>"Admission Overview"</h3>
                    <dl class="fact-list">
                        {facts
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                </CardAnimated>
            }
            .into_any()
        }
    }
}
