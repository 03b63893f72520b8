//! Listing page of one component category with its filter sidebar.

pub mod dropdown;
pub mod options;
pub mod results;
pub mod sidebar;
pub mod state;

use crate::domain::a001_component::api::{brands_in_category, fetch_components};
use crate::domain::a001_component::mock_data::mock_components;
use contracts::enums::component_category::ComponentCategory;
use contracts::shared::config::PageConfig;
use dropdown::{close_on_outside_click, DropdownRefs, Dropdowns};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use results::ResultList;
use sidebar::FilterSidebar;
use state::{CatalogState, FilterState};

#[component]
pub fn ComponentCategoryPage() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let latency_ms = config.catalog.simulated_latency_ms;
    let apply_filters = config.filters.apply_to_results;

    let params = use_params_map();
    let category = Memo::new(move |_| {
        let slug = params.read().get("category").unwrap_or_default();
        let category = ComponentCategory::from_slug(&slug);
        log::debug!("Route segment {:?} resolved to {:?}", slug, category);
        category
    });

    let catalog = RwSignal::new(CatalogState::default());
    let filters = RwSignal::new(FilterState::new(&config.filters));
    let dropdowns = RwSignal::new(Dropdowns::default());
    let refs = DropdownRefs::new();

    close_on_outside_click(dropdowns, refs);

    // Перезагрузка при смене категории
    Effect::new(move |_| match category.get() {
        Some(category) => {
            let Some(token) = catalog.try_update(|state| state.begin_load()) else {
                return;
            };
            log::debug!("Loading {} (request {})", category, token);
            leptos::task::spawn_local(async move {
                let result = fetch_components(category, latency_ms).await;
                // the page may be gone by now
                catalog.try_update(|state| state.finish_load(token, result));
            });
        }
        None => catalog.update(|state| state.reset_empty()),
    });

    let brands = Memo::new(move |_| match category.get() {
        Some(category) => mock_components()
            .map(|catalog| brands_in_category(catalog, category))
            .unwrap_or_default(),
        None => Vec::new(),
    });

    // Бренд из другой категории не должен оставаться в фильтре
    Effect::new(move |_| {
        let available = brands.get();
        filters.maybe_update(|f| f.retain_brand(&available));
    });

    let visible_items = Memo::new(move |_| {
        let items = catalog.with(|state| state.items.clone());
        if apply_filters {
            filters.with(|f| f.apply(&items))
        } else {
            items
        }
    });

    view! {
        <div class="category-page">
            <FilterSidebar filters=filters dropdowns=dropdowns refs=refs brands=brands />
            <ResultList items=visible_items catalog=catalog />
        </div>
    }
}
