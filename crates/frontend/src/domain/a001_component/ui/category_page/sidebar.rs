use super::dropdown::{DropdownRefs, Dropdowns, MultiSelectDropdown};
use super::options::FilterFamily;
use super::state::{FilterState, RangeKind};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Slider over `[domain.min, domain.max]` driving only the upper bound
#[component]
fn RangeSlider(
    label: &'static str,
    unit: &'static str,
    kind: RangeKind,
    filters: RwSignal<FilterState>,
) -> impl IntoView {
    let domain = filters.with_untracked(|f| f.range(kind).domain());
    let max = move || filters.with(|f| f.range(kind).max());

    view! {
        <div class="filter-sidebar__group">
            <label class="filter-sidebar__label">{label}</label>
            <input
                type="range"
                class="filter-range"
                min=domain.min.to_string()
                max=domain.max.to_string()
                step=domain.step.to_string()
                prop:value=move || max().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    filters.update(|f| f.apply_slider_input(kind, &raw));
                }
            />
            <div class="filter-range__labels">
                <span>{format!("{} {}", domain.min, unit)}</span>
                <span>{move || filters.with(|f| f.range(kind).max_label(unit))}</span>
            </div>
        </div>
    }
}

#[component]
pub fn FilterSidebar(
    filters: RwSignal<FilterState>,
    dropdowns: RwSignal<Dropdowns>,
    refs: DropdownRefs,
    #[prop(into)] brands: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <aside class="filter-sidebar">
            <h2 class="filter-sidebar__title">"FILTRER LES PRODUITS :"</h2>
            <div class="filter-sidebar__groups">
                <div class="filter-sidebar__group">
                    <label class="filter-sidebar__label">"CHERCHER UNE RÉFÉRENCE"</label>
                    <div class="filter-sidebar__search">
                        <input
                            type="text"
                            placeholder="Désignation, modèle ..."
                            prop:value=move || filters.with(|f| f.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filters.update(|f| f.set_query(query));
                            }
                        />
                        <span class="filter-sidebar__search-icon">{icon("search")}</span>
                    </div>
                </div>

                <div class="filter-sidebar__group">
                    <label class="filter-sidebar__label">"MARQUE"</label>
                    <select
                        class="filter-sidebar__select"
                        prop:value=move || filters.with(|f| f.brand.clone().unwrap_or_default())
                        on:change=move |ev| {
                            let brand = event_target_value(&ev);
                            filters.update(|f| f.set_brand(brand));
                        }
                    >
                        <option value="">"Sélectionner"</option>
                        {move || {
                            brands
                                .get()
                                .into_iter()
                                .map(|brand| view! { <option value=brand.clone()>{brand.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <RangeSlider label="PRIX" unit="€" kind=RangeKind::Price filters=filters />

                {FilterFamily::all()
                    .into_iter()
                    .map(|family| {
                        view! {
                            <MultiSelectDropdown
                                family=family
                                filters=filters
                                dropdowns=dropdowns
                                node_ref=refs.get(family)
                            />
                        }
                    })
                    .collect_view()}

                <RangeSlider
                    label="FRÉQUENCE CPU (GHz)"
                    unit="GHz"
                    kind=RangeKind::Frequency
                    filters=filters
                />

                // extra filters are not wired yet
                <Button appearance=ButtonAppearance::Primary>"+ DE FILTRES"</Button>
            </div>
        </aside>
    }
}
