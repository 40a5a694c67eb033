use super::super::view_model::InstituteDetailsVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::contact_list::ContactList;
use leptos::prelude::*;

#[component]
pub fn ContactTab(vm: InstituteDetailsVm) -> impl IntoView {
    view! {
        <CardAnimated class="detail-card">
            <h3>"Contact Information"</h3>
            {move || {
                vm.with_institute(|i| {
                    view! {
                        <ContactList
                            address=i.address.clone().or_else(|| i.location())
                            phone=i.phone.clone()
                            email=i.email.clone()
                            website=i.website.clone()
                        />
                    }
                })
            }}
        </CardAnimated>
    }
}
