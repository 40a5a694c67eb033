use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::link::Link;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a002_admission::{Admission, AdmissionStatus};
use contracts::shared::text::{format_short_date, or_dash};
use leptos::prelude::*;

pub fn status_variant(status: Option<AdmissionStatus>) -> &'static str {
    match status {
        Some(s) if s.is_urgent() => "warning",
        Some(AdmissionStatus::Open) => "success",
        Some(AdmissionStatus::Closed) => "error",
        _ => "neutral",
    }
}

#[component]
pub fn AdmissionCard(admission: Admission, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let href = format!("/admissions/{}", admission.id.as_str());
    let status = admission.status_kind();
    let status_label = status
        .map(|s| s.display_name().to_string())
        .or_else(|| admission.status.clone());

    view! {
        <CardAnimated delay_ms=delay_ms class="admission-card">
            <div class="admission-card__head">
                <div>
                    <h3 class="admission-card__program">{admission.program.clone()}</h3>
                    <p class="admission-card__institute">{admission.institute.clone()}</p>
                </div>
                <div class="admission-card__badges">
                    {admission.field.clone().map(|f| view! { <Badge variant="primary".to_string()>{f}</Badge> })}
                    {status_label.map(|label| view! {
                        <Badge variant=status_variant(status).to_string()>{label}</Badge>
                    })}
                </div>
            </div>
            <div class="admission-card__meta">
                <span>{icon("map-pin")}{or_dash(admission.city.as_deref())}</span>
                <span>{icon("clock")}{or_dash(admission.duration.as_deref())}</span>
                <span>{icon("calendar")}{format!("Deadline: {}", format_short_date(admission.deadline.as_deref()))}</span>
                <span>{icon("users")}{format!("Seats: {}", or_dash(admission.seats.as_deref()))}</span>
            </div>
            <div class="admission-card__foot">
                <span class="admission-card__fee">{format!("Fee: {}", or_dash(admission.fee.as_deref()))}</span>
                <Link href=href class="button button--primary">"View Details"</Link>
            </div>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(Some(AdmissionStatus::ClosingSoon)), "warning");
        assert_eq!(status_variant(Some(AdmissionStatus::Open)), "success");
        assert_eq!(status_variant(Some(AdmissionStatus::Closed)), "error");
        assert_eq!(status_variant(None), "neutral");
    }
}
