use super::state::CatalogState;
use crate::shared::icons::star;
use contracts::domain::a001_component::Component;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::Spinner;

const RATING_SLOTS: usize = 5;
/// Placeholder rating until reviews exist
const RATING_FILLED: usize = 4;
const REVIEWS_LABEL: &str = "10 avis";
const STOCK_LABEL: &str = "EN STOCK";

pub fn results_heading(count: usize) -> String {
    format!("{} PRODUITS CORRESPONDENT", count)
}

/// Filled flag of each rating slot, left to right
pub fn rating_slots() -> [bool; RATING_SLOTS] {
    let mut slots = [false; RATING_SLOTS];
    for slot in slots.iter_mut().take(RATING_FILLED) {
        *slot = true;
    }
    slots
}

/// Price as shown on a row: `$449`, `$649.9`
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

#[component]
pub fn ResultRow(component: Component) -> impl IntoView {
    let specs = component.specs_summary();
    let price = format_price(component.price);
    let row_id = component.id.as_string();

    view! {
        <div class="result-row" data-component-id=row_id>
            <img class="result-row__image" src=component.image_url.clone() alt=component.name.clone() />
            <div class="result-row__body">
                <h3 class="result-row__name">{component.name.clone()}</h3>
                <p class="result-row__specs">{specs}</p>
                <div class="result-row__rating">
                    {rating_slots().into_iter().map(star).collect_view()}
                    <span class="result-row__reviews">{REVIEWS_LABEL}</span>
                </div>
                <div class="result-row__footer">
                    <p class="result-row__stock">{STOCK_LABEL}</p>
                    <span class="result-row__price">{price}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ResultList(
    #[prop(into)] items: Signal<Vec<Component>>,
    catalog: RwSignal<CatalogState>,
) -> impl IntoView {
    view! {
        <div class="results">
            <div class="results__header">
                <h2 class="results__title">{move || results_heading(items.with(|items| items.len()))}</h2>
                // sorting is not implemented yet
                <select class="results__sort">
                    <option>"Trier par"</option>
                </select>
            </div>

            {move || catalog.with(|s| s.error.clone()).map(|e| view! {
                <div class="error">{e}</div>
            })}

            <Show when=move || catalog.with(|s| s.is_loading)>
                <div class="results__loading">
                    <Spinner />
                    <span>"Chargement..."</span>
                </div>
            </Show>

            <div class="results__list">
                <For
                    each=move || items.get()
                    key=|component| component.id.as_string()
                    children=move |component: Component| view! { <ResultRow component=component /> }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_component::api::components_in_category;
    use contracts::domain::a001_component::ComponentId;
    use contracts::enums::component_category::ComponentCategory;

    #[test]
    fn test_rating_has_four_of_five_stars() {
        let slots = rating_slots();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots.iter().filter(|filled| **filled).count(), 4);
        assert_eq!(slots, [true, true, true, true, false]);
    }

    #[test]
    fn test_results_heading() {
        assert_eq!(results_heading(0), "0 PRODUITS CORRESPONDENT");
        assert_eq!(results_heading(12), "12 PRODUITS CORRESPONDENT");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(449.0), "$449");
        assert_eq!(format_price(649.9), "$649.9");
    }

    #[test]
    fn test_processor_slug_with_mixed_catalog() {
        let item = |id: u32, category: ComponentCategory| Component {
            id: ComponentId::new(id),
            name: format!("item {id}"),
            category,
            brand: "Brand".to_string(),
            price: 10.0,
            image_url: String::new(),
            specs: Vec::new(),
        };
        let catalog = vec![
            item(1, ComponentCategory::Processor),
            item(2, ComponentCategory::Gpu),
            item(3, ComponentCategory::Processor),
            item(4, ComponentCategory::Gpu),
            item(5, ComponentCategory::Processor),
        ];

        let category = ComponentCategory::from_slug("processeurs").unwrap();
        let mut state = CatalogState::default();
        let token = state.begin_load();
        state.finish_load(token, Ok(components_in_category(&catalog, category)));

        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 3);
        assert_eq!(results_heading(state.items.len()), "3 PRODUITS CORRESPONDENT");
    }

    #[test]
    fn test_row_keys_identify_components() {
        let catalog = crate::domain::a001_component::mock_data::mock_components().unwrap();
        let keys: Vec<String> = catalog.iter().map(|c| c.id.as_string()).collect();
        let mut distinct = keys.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), keys.len());

        for (component, key) in catalog.iter().zip(&keys) {
            assert_eq!(ComponentId::from_string(key), Ok(component.id));
        }
    }

    #[test]
    fn test_unknown_slug_yields_empty_listing() {
        let category = ComponentCategory::from_slug("widgets");
        assert_eq!(category, None);

        let mut state = CatalogState::default();
        state.reset_empty();
        assert!(state.items.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(results_heading(state.items.len()), "0 PRODUITS CORRESPONDENT");
    }
}
