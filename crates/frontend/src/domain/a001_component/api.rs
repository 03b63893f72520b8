use super::mock_data::mock_components;
use contracts::domain::a001_component::Component;
use contracts::enums::component_category::ComponentCategory;

/// Items of one category, keeping catalog order
pub fn components_in_category(catalog: &[Component], category: ComponentCategory) -> Vec<Component> {
    catalog
        .iter()
        .filter(|component| component.category == category)
        .cloned()
        .collect()
}

/// Уникальные бренды категории в порядке первого появления
pub fn brands_in_category(catalog: &[Component], category: ComponentCategory) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for component in catalog.iter().filter(|c| c.category == category) {
        if !brands.contains(&component.brand) {
            brands.push(component.brand.clone());
        }
    }
    brands
}

/// Load the components of a category from the mock catalog.
///
/// Suspends for `latency_ms` first to mimic a network round trip.
pub async fn fetch_components(
    category: ComponentCategory,
    latency_ms: u32,
) -> Result<Vec<Component>, String> {
    if latency_ms > 0 {
        gloo_timers::future::TimeoutFuture::new(latency_ms).await;
    }
    let catalog = mock_components()?;
    Ok(components_in_category(catalog, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_component::ComponentId;

    fn item(id: u32, category: ComponentCategory, brand: &str) -> Component {
        Component {
            id: ComponentId::new(id),
            name: format!("item {id}"),
            category,
            brand: brand.to_string(),
            price: 100.0,
            image_url: String::new(),
            specs: Vec::new(),
        }
    }

    fn catalog() -> Vec<Component> {
        vec![
            item(1, ComponentCategory::Processor, "AMD"),
            item(2, ComponentCategory::Gpu, "NVIDIA"),
            item(3, ComponentCategory::Processor, "Intel"),
            item(4, ComponentCategory::Gpu, "AMD"),
            item(5, ComponentCategory::Processor, "AMD"),
        ]
    }

    #[test]
    fn test_components_in_category_keeps_order() {
        let ids: Vec<u32> = components_in_category(&catalog(), ComponentCategory::Processor)
            .iter()
            .map(|c| c.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_components_in_empty_category() {
        assert!(components_in_category(&catalog(), ComponentCategory::Cooling).is_empty());
    }

    #[test]
    fn test_brands_in_category_distinct() {
        assert_eq!(
            brands_in_category(&catalog(), ComponentCategory::Processor),
            vec!["AMD".to_string(), "Intel".to_string()]
        );
        assert_eq!(
            brands_in_category(&catalog(), ComponentCategory::Gpu),
            vec!["NVIDIA".to_string(), "AMD".to_string()]
        );
    }

    #[test]
    fn test_mock_catalog_processors() {
        let catalog = mock_components().unwrap();
        let processors = components_in_category(catalog, ComponentCategory::Processor);
        assert_eq!(processors.len(), 5);
        assert!(processors.iter().all(|c| c.category == ComponentCategory::Processor));
    }
}
