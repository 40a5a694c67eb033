use super::super::view_model::InstituteDetailsVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::empty_state::NotAvailable;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FacilitiesTab(vm: InstituteDetailsVm) -> impl IntoView {
    let facilities = move || vm.with_institute(|i| i.facilities.clone()).unwrap_or_default();

    view! {
        <CardAnimated delay_ms=0 class="detail-card".to_string()>
            <h3>"Campus Facilities"</h3>
            {move || {
                let facilities = facilities();
                if facilities.is_empty() {
                    view! { <NotAvailable what="facilities" /> }.into_any()
                } else {
                    view! {
                        <ul class="check-list">
                            {facilities
                                .into_iter()
                                .map(|f| view! { <li>{icon("check-circle")}<span>{f}</span></li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </CardAnimated>
    }
}
