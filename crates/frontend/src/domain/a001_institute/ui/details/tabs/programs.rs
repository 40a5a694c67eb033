use super::super::view_model::InstituteDetailsVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::empty_state::NotAvailable;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ProgramsTab(vm: InstituteDetailsVm) -> impl IntoView {
    let programs = move || vm.with_institute(|i| i.programs.clone()).unwrap_or_default();

    view! {
        <CardAnimated delay_ms=0 class="detail-card".to_string()>
            <h3>"Programs Offered"</h3>
            {move || {
                let programs = programs();
                if programs.is_empty() {
                    view! { <NotAvailable what="programs" /> }.into_any()
                } else {
                    view! {
                        <div class="chip-grid">
                            {programs
                                .into_iter()
                                .map(|p| view! { <div class="chip">{icon("graduation-cap")}<span>{p}</span></div> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </CardAnimated>
    }
}
