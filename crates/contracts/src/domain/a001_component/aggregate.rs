use crate::domain::common::AggregateId;
use crate::enums::component_category::ComponentCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID тип
// ============================================================================

/// Идентификатор компонента каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub u32);

impl ComponentId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ComponentId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(ComponentId::new)
    }
}

// ============================================================================
// Агрегат
// ============================================================================

/// One technical characteristic, e.g. `Socket: AMD AM5`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    pub value: String,
}

/// Catalog item. Specs keep the order in which the catalog lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub category: ComponentCategory,
    pub brand: String,
    pub price: f64,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    #[serde(default)]
    pub specs: Vec<Spec>,
}

impl Component {
    /// Value of the named spec, first match wins
    pub fn spec(&self, name: &str) -> Option<&str> {
        self.specs
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.value.as_str())
    }

    /// `"key: value"` pairs joined by `", "`, in catalog order
    pub fn specs_summary(&self) -> String {
        self.specs
            .iter()
            .map(|spec| format!("{}: {}", spec.name, spec.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
