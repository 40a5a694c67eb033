use contracts::shared::listing::filter_state::ALL;
use leptos::prelude::*;

/// Dropdown over a backend facet list with a leading "all" entry.
///
/// Emits the raw option value; `"all"` means no filter.
#[component]
pub fn FacetSelect(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Current value, `"all"` when unset
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    /// Caption of the "all" option, e.g. "All Cities"
    #[prop(into)]
    all_label: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let choices = move || {
        let mut all = vec![(ALL.to_string(), all_label.clone())];
        all.extend(options.get().into_iter().map(|o| (o.clone(), o)));
        all
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=choices
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
