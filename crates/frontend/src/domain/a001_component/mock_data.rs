//! Static catalog standing in for a product API.

use contracts::domain::a001_component::Component;
use once_cell::sync::Lazy;

const MOCK_COMPONENTS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "AMD Ryzen 7 7800X3D",
    "category": "Processor",
    "brand": "AMD",
    "price": 449,
    "imageUrl": "/img/components/ryzen-7-7800x3d.webp",
    "specs": [
      { "name": "Cœurs", "value": "8" },
      { "name": "Fréquence", "value": "4.2 GHz" },
      { "name": "Socket", "value": "AMD AM5" },
      { "name": "Plateforme", "value": "AMD Zen 4" }
    ]
  },
  {
    "id": 2,
    "name": "Intel Core i5-14600K",
    "category": "Processor",
    "brand": "Intel",
    "price": 319,
    "imageUrl": "/img/components/core-i5-14600k.webp",
    "specs": [
      { "name": "Cœurs", "value": "14" },
      { "name": "Fréquence", "value": "3.5 GHz" },
      { "name": "Socket", "value": "Intel 1700" },
      { "name": "Plateforme", "value": "Intel Raptor Lake-S R" }
    ]
  },
  {
    "id": 3,
    "name": "NVIDIA GeForce RTX 4070 SUPER",
    "category": "Gpu",
    "brand": "NVIDIA",
    "price": 649.9,
    "imageUrl": "/img/components/rtx-4070-super.webp",
    "specs": [
      { "name": "Mémoire", "value": "12 Go GDDR6X" },
      { "name": "Interface", "value": "PCIe 4.0 x16" }
    ]
  },
  {
    "id": 4,
    "name": "AMD Ryzen 5 5600X",
    "category": "Processor",
    "brand": "AMD",
    "price": 139.9,
    "imageUrl": "/img/components/ryzen-5-5600x.webp",
    "specs": [
      { "name": "Cœurs", "value": "6" },
      { "name": "Fréquence", "value": "3.7 GHz" },
      { "name": "Socket", "value": "AMD AM4" },
      { "name": "Plateforme", "value": "AMD Zen 3" }
    ]
  },
  {
    "id": 5,
    "name": "ASUS TUF Gaming B650-PLUS WIFI",
    "category": "Motherboard",
    "brand": "ASUS",
    "price": 199.9,
    "imageUrl": "/img/components/tuf-b650-plus.webp",
    "specs": [
      { "name": "Socket", "value": "AMD AM5" },
      { "name": "Format", "value": "ATX" }
    ]
  },
  {
    "id": 6,
    "name": "Intel Core Ultra 7 265K",
    "category": "Processor",
    "brand": "Intel",
    "price": 409,
    "imageUrl": "/img/components/core-ultra-7-265k.webp",
    "specs": [
      { "name": "Cœurs", "value": "20" },
      { "name": "Fréquence", "value": "3.9 GHz" },
      { "name": "Socket", "value": "Intel 1851" },
      { "name": "Plateforme", "value": "Intel Arrow-Lake-S" }
    ]
  },
  {
    "id": 7,
    "name": "AMD Radeon RX 7800 XT",
    "category": "Gpu",
    "brand": "AMD",
    "price": 519,
    "imageUrl": "/img/components/rx-7800-xt.webp",
    "specs": [
      { "name": "Mémoire", "value": "16 Go GDDR6" },
      { "name": "Interface", "value": "PCIe 4.0 x16" }
    ]
  },
  {
    "id": 8,
    "name": "AMD Ryzen Threadripper PRO 7995WX",
    "category": "Processor",
    "brand": "AMD",
    "price": 12499,
    "imageUrl": "/img/components/threadripper-pro-7995wx.webp",
    "specs": [
      { "name": "Cœurs", "value": "96" },
      { "name": "Fréquence", "value": "2.5 GHz" },
      { "name": "Socket", "value": "AMD sTR5" },
      { "name": "Plateforme", "value": "AMD Zen 4" }
    ]
  },
  {
    "id": 9,
    "name": "Corsair Vengeance DDR5 32 Go (2 x 16 Go) 6000 MHz",
    "category": "Memory",
    "brand": "Corsair",
    "price": 114.9,
    "imageUrl": "/img/components/vengeance-ddr5-32.webp",
    "specs": [
      { "name": "Type", "value": "DDR5" },
      { "name": "Capacité", "value": "32 Go" }
    ]
  },
  {
    "id": 10,
    "name": "Samsung 990 PRO 2 To",
    "category": "Storage",
    "brand": "Samsung",
    "price": 179.9,
    "imageUrl": "/img/components/990-pro-2tb.webp",
    "specs": [
      { "name": "Interface", "value": "PCIe 4.0 NVMe" },
      { "name": "Capacité", "value": "2 To" }
    ]
  }
]"#;

static MOCK_COMPONENTS: Lazy<Result<Vec<Component>, String>> = Lazy::new(|| {
    serde_json::from_str(MOCK_COMPONENTS_JSON).map_err(|e| format!("Invalid mock catalog: {e}"))
});

/// Весь каталог в исходном порядке
pub fn mock_components() -> Result<&'static [Component], String> {
    MOCK_COMPONENTS
        .as_ref()
        .map(|items| items.as_slice())
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::component_category::ComponentCategory;
    use std::collections::HashSet;

    #[test]
    fn test_mock_catalog_parses() {
        let catalog = mock_components().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(
            catalog.iter().filter(|c| c.category == ComponentCategory::Processor).count(),
            5
        );
    }

    #[test]
    fn test_mock_catalog_ids_unique() {
        let catalog = mock_components().unwrap();
        let ids: HashSet<_> = catalog.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
