use super::super::view_model::InstituteDetailsVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::empty_state::NotAvailable;
use crate::shared::icons::icon;
use contracts::shared::text::{or_dash, DASH};
use leptos::prelude::*;

#[component]
pub fn OverviewTab(vm: InstituteDetailsVm) -> impl IntoView {
    move || {
        let Some(inst) = vm.institute.get() else {
            return view! { <></> }.into_any();
        };

        let rankings = if inst.rankings.is_empty() {
            view! { <NotAvailable what="rankings" /> }.into_any()
        } else {
            view! {
                <ul class="detail-list">
                    {inst
                        .rankings
                        .iter()
                        .map(|r| view! {
                            <li class="detail-list__item">
                                {icon("award")}
                                <span class="detail-list__label">{r.title.clone()}</span>
                                <span class="detail-list__value">
                                    {r.rank.clone().unwrap_or_else(|| DASH.to_string())}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        };

        view! {
            <div class="detail-grid">
                <CardAnimated delay_ms=0 class="detail-card".to_string()>
                    <h3>"About"</h3>
                    <p>{inst.description.clone().unwrap_or_else(|| "No description available.".to_string())}</p>
                </CardAnimated>
                <CardAnimated delay_ms=60 class="detail-card".to_string()>
                    <h3>"Quick Facts"</h3>
                    <dl class="fact-list">
                        <dt>"Type"</dt><dd>{or_dash(inst.institute_type.as_deref())}</dd>
                        <dt>"Category"</dt><dd>{or_dash(inst.category.as_deref())}</dd>
                        <dt>"Affiliation"</dt><dd>{or_dash(inst.affiliation.as_deref())}</dd>
                        <dt>"Founded"</dt><dd>{or_dash(inst.founded.as_deref())}</dd>
                        <dt>"Address"</dt><dd>{or_dash(inst.address.as_deref())}</dd>
                    </dl>
                </CardAnimated>
                <CardAnimated delay_ms=120 class="detail-card".to_string()>
                    <h3>"Rankings & Recognition"</h3>
                    {rankings}
                </CardAnimated>
            </div>
        }
        .into_any()
    }
}
