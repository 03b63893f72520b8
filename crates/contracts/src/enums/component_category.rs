use serde::{Deserialize, Serialize};

/// Catalog categories of PC components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentCategory {
    Processor,
    Gpu,
    Motherboard,
    Memory,
    Storage,
    PowerSupply,
    Case,
    Cooling,
}

impl ComponentCategory {
    /// Human-readable label shown on the storefront
    pub fn label(&self) -> &'static str {
        match self {
            ComponentCategory::Processor => "Processeurs",
            ComponentCategory::Gpu => "Cartes Graphiques",
            ComponentCategory::Motherboard => "Cartes Mères",
            ComponentCategory::Memory => "Mémoire RAM",
            ComponentCategory::Storage => "Stockage",
            ComponentCategory::PowerSupply => "Alimentations",
            ComponentCategory::Case => "Boîtiers",
            ComponentCategory::Cooling => "Refroidissement",
        }
    }

    /// URL path segment: the label lower-cased, spaces replaced by hyphens
    pub fn slug(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }

    /// All categories in declaration order
    pub fn all() -> Vec<ComponentCategory> {
        vec![
            ComponentCategory::Processor,
            ComponentCategory::Gpu,
            ComponentCategory::Motherboard,
            ComponentCategory::Memory,
            ComponentCategory::Storage,
            ComponentCategory::PowerSupply,
            ComponentCategory::Case,
            ComponentCategory::Cooling,
        ]
    }

    /// Resolve a route segment. The segment must equal a slug exactly;
    /// anything else yields `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|category| category.slug() == slug)
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
