use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::link::Link;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a001_institute::Institute;
use contracts::enums::InstituteType;
use contracts::shared::text::{format_count, institute_detail_path, DASH};
use leptos::prelude::*;

/// Grid card linking to `/{type}/{slug}-{id}`.
#[component]
pub fn InstituteCard(
    institute: Institute,
    /// Listing type, used when the record has no recognisable type of its own
    fallback_kind: InstituteType,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let kind = institute.kind().unwrap_or(fallback_kind);
    let href = institute_detail_path(kind, &institute.institute_name, institute.id.as_str());
    let type_label = institute
        .institute_type
        .clone()
        .unwrap_or_else(|| kind.api_value().to_string());
    let initials = institute.initials();
    let name = institute.institute_name.clone();

    view! {
        <Link href=href class="institute-card__link">
            <CardAnimated delay_ms=delay_ms class="institute-card">
                <div class="institute-card__media">
                    {match institute.image.clone() {
                        Some(src) => view! {
                            <img class="institute-card__image" src=src alt=name.clone() />
                        }.into_any(),
                        None => view! {
                            <div class="institute-card__placeholder">{initials}</div>
                        }.into_any(),
                    }}
                    {institute.featured.then(|| view! {
                        <Badge variant="warning".to_string() class="institute-card__featured".to_string()>
                            "Featured"
                        </Badge>
                    })}
                </div>
                <div class="institute-card__body">
                    <Badge variant="outline".to_string()>{type_label}</Badge>
                    <h3 class="institute-card__title">{name}</h3>
                    <div class="institute-card__meta">
                        {icon("map-pin")}
                        <span>{institute.city.clone().unwrap_or_else(|| DASH.to_string())}</span>
                    </div>
                    {institute.students.map(|n| view! {
                        <div class="institute-card__meta">
                            {icon("users")}
                            <span>{format!("{} students", format_count(n))}</span>
                        </div>
                    })}
                    {institute.rating.map(|r| view! {
                        <div class="institute-card__meta">
                            {icon("star")}
                            <span>{format!("{r:.1}")}</span>
                        </div>
                    })}
                </div>
            </CardAnimated>
        </Link>
    }
}
