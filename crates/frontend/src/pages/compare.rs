use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::link::Link;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::shared::compare::{CompareSelection, MAX_COMPARE};
use contracts::shared::text::format_count;
use leptos::prelude::*;

/// A university offered on the compare page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub location: &'static str,
    pub rating: f64,
    pub students: u64,
    pub fee: &'static str,
    pub programs: u32,
    pub ranking: &'static str,
}

pub const CATALOGUE: &[CompareEntry] = &[
    CompareEntry {
        id: "nust",
        name: "NUST",
        full_name: "National University of Sciences and Technology",
        location: "Islamabad",
        rating: 4.8,
        students: 15_000,
        fee: "PKR 180,000/year",
        programs: 45,
        ranking: "#1 Engineering",
    },
    CompareEntry {
        id: "lums",
        name: "LUMS",
        full_name: "Lahore University of Management Sciences",
        location: "Lahore",
        rating: 4.7,
        students: 5_500,
        fee: "PKR 800,000/year",
        programs: 35,
        ranking: "#1 Business",
    },
    CompareEntry {
        id: "aku",
        name: "AKU",
        full_name: "Aga Khan University",
        location: "Karachi",
        rating: 4.9,
        students: 8_000,
        fee: "PKR 2,500,000/year",
        programs: 28,
        ranking: "#1 Medical",
    },
];

pub fn find_entry(id: &str) -> Option<&'static CompareEntry> {
    CATALOGUE.iter().find(|e| e.id == id)
}

/// Catalogue entries not yet picked, in catalogue order.
pub fn available(selection: &CompareSelection) -> Vec<&'static CompareEntry> {
    CATALOGUE.iter().filter(|e| !selection.contains(e.id)).collect()
}

#[component]
fn CompareCard(entry: &'static CompareEntry, on_remove: Callback<&'static str>) -> impl IntoView {
    let row = |label: &'static str, value: String| {
        view! {
            <div class="compare-card__row">
                <span class="compare-card__label">{label}</span>
                <span class="compare-card__value">{value}</span>
            </div>
        }
    };

    view! {
        <CardAnimated class="compare-card">
            <button class="compare-card__remove" on:click=move |_| on_remove.run(entry.id)>
                {icon("x")}
            </button>
            <div class="compare-card__banner">
                <h3>{entry.name}</h3>
            </div>
            <h4 class="compare-card__full-name">{entry.full_name}</h4>
            <div class="compare-card__location">{icon("map-pin")}<span>{entry.location}</span></div>
            {row("Rating", format!("{:.1}", entry.rating))}
            {row("Students", format_count(entry.students))}
            {row("Average Fee", entry.fee.to_string())}
            {row("Programs", format!("{}+", entry.programs))}
            {row("Ranking", entry.ranking.to_string())}
            <Link
                href=format!("/universities?search={}", urlencoding::encode(entry.name))
                class="button button--primary"
            >
                "View Details"
            </Link>
        </CardAnimated>
    }
}

#[component]
pub fn ComparePage() -> impl IntoView {
    let selection = RwSignal::new(CompareSelection::new());

    let on_add = move |id: String| {
        selection.update(|s| {
            if !s.add(&id) {
                log::debug!("compare: {id} not added");
            }
        });
    };
    let on_remove = Callback::new(move |id: &'static str| selection.update(|s| s.remove(id)));

    let picker = move || {
        (!selection.with(|s| s.is_full())).then(|| {
            let options = selection.with(available);
            let count = selection.with(|s| s.len());
            view! {
                <CardAnimated class="compare-picker">
                    <div class="form__group">
                        <label class="form__label">"Add Institute to Compare"</label>
                        <select
                            class="form__select"
                            prop:value=""
                            on:change=move |ev| on_add(event_target_value(&ev))
                        >
                            <option value="" disabled=true selected=true>"Select an institute"</option>
                            {options
                                .into_iter()
                                .map(|e| view! { <option value=e.id>{e.full_name}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <span class="text-muted">{format!("{count}/{MAX_COMPARE} institutes selected")}</span>
                </CardAnimated>
            }
        })
    };

    let grid = move || {
        let picked: Vec<&'static CompareEntry> =
            selection.with(|s| s.ids().iter().filter_map(|id| find_entry(id)).collect());
        if picked.is_empty() {
            return view! {
                <CardAnimated class="compare-empty">
                    <span class="compare-empty__icon">{icon("scale")}</span>
                    <h3>"No institutes selected"</h3>
                    <p>"Pick up to three institutes above to compare them side by side."</p>
                </CardAnimated>
            }
            .into_any();
        }
        let empty_slots = MAX_COMPARE.saturating_sub(picked.len());
        view! {
            <div class="card-grid compare-grid">
                {picked
                    .into_iter()
                    .map(|entry| view! { <CompareCard entry=entry on_remove=on_remove /> })
                    .collect_view()}
                {(0..empty_slots)
                    .map(|_| view! {
                        <div class="compare-slot">
                            {icon("graduation-cap")}
                            <p>"Add institute to compare"</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="compare--custom" category=PAGE_CAT_CUSTOM>
            <PageHeader
                title="Compare Institutes"
                subtitle="Compare up to 3 institutes side by side to make an informed decision".to_string()
            />
            <div class="page__content">
                {picker}
                {grid}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_excludes_selected() {
        let mut sel = CompareSelection::new();
        assert_eq!(available(&sel).len(), 3);
        sel.add("lums");
        let ids: Vec<_> = available(&sel).iter().map(|e| e.id).collect();
        assert_eq!(ids, ["nust", "aku"]);
    }

    #[test]
    fn test_catalogue_fills_selection() {
        let mut sel = CompareSelection::new();
        for entry in CATALOGUE {
            assert!(sel.add(entry.id));
        }
        assert!(sel.is_full());
        assert!(available(&sel).is_empty());
        assert_eq!(find_entry("aku").map(|e| e.location), Some("Karachi"));
        assert!(find_entry("giki").is_none());
    }
}
