use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// One tab of a details page: (key, label, icon).
pub type TabSpec = (&'static str, &'static str, &'static str);

/// Row of toggle buttons driving a details page's `active_tab`.
#[component]
pub fn TabBar(tabs: &'static [TabSpec], active_tab: RwSignal<&'static str>) -> impl IntoView {
    let tab_icon = |name: &str| view! { <span class="tab-icon">{icon(name)}</span> };

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__tabs">
            {tabs
                .iter()
                .map(|(key, label, icon_name)| {
                    let key = *key;
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active_tab.get() == key {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| active_tab.set(key)
                        >
                            {tab_icon(icon_name)}
                            {*label}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}
