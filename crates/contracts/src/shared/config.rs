use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageConfig {
    pub catalog: CatalogConfig,
    pub filters: FiltersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Искусственная задержка перед ответом mock-каталога
    pub simulated_latency_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FiltersConfig {
    /// Intersect the listing with the sidebar selections.
    /// Off by default: the storefront only filters by category.
    pub apply_to_results: bool,
    /// Ограничивать значения слайдеров диапазоном вместо хранения как есть
    pub clamp_ranges: bool,
    pub price: RangeDomain,
    pub frequency: RangeDomain,
}

/// Bounds and step of a range slider
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RangeDomain {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

/// Конфигурация по умолчанию, встроенная в бандл
const DEFAULT_CONFIG: &str = r#"
[catalog]
simulated_latency_ms = 500

[filters]
apply_to_results = false
clamp_ranges = false

[filters.price]
min = 55
max = 13000
step = 100

[filters.frequency]
min = 2
max = 5
step = 1
"#;

/// Runtime overrides, typically parsed from the page query string
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub apply_filters: Option<bool>,
    pub clamp_ranges: Option<bool>,
    pub latency_ms: Option<u32>,
}

/// Загрузка встроенной конфигурации
pub fn load_config() -> anyhow::Result<PageConfig> {
    let config: PageConfig = toml::from_str(DEFAULT_CONFIG)?;
    config.validate()?;
    Ok(config)
}

impl PageConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, domain) in [("price", &self.filters.price), ("frequency", &self.filters.frequency)] {
            if domain.min > domain.max {
                anyhow::bail!("filters.{name}: min {} is above max {}", domain.min, domain.max);
            }
            if domain.step <= 0 {
                anyhow::bail!("filters.{name}: step must be positive, got {}", domain.step);
            }
        }
        Ok(())
    }

    /// Layer overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(apply) = overrides.apply_filters {
            self.filters.apply_to_results = apply;
        }
        if let Some(clamp) = overrides.clamp_ranges {
            self.filters.clamp_ranges = clamp;
        }
        if let Some(latency) = overrides.latency_ms {
            self.catalog.simulated_latency_ms = latency;
        }
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                simulated_latency_ms: 500,
            },
            filters: FiltersConfig {
                apply_to_results: false,
                clamp_ranges: false,
                price: RangeDomain {
                    min: 55,
                    max: 13000,
                    step: 100,
                },
                frequency: RangeDomain {
                    min: 2,
                    max: 5,
                    step: 1,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.catalog.simulated_latency_ms, 500);
        assert_eq!(config.filters.price, RangeDomain { min: 55, max: 13000, step: 100 });
        assert_eq!(config.filters.frequency, RangeDomain { min: 2, max: 5, step: 1 });
    }

    #[test]
    fn test_embedded_config_matches_default() {
        assert_eq!(load_config().unwrap(), PageConfig::default());
    }

    #[test]
    fn test_overrides_are_layered() {
        let overrides = ConfigOverrides {
            apply_filters: Some(true),
            clamp_ranges: None,
            latency_ms: Some(0),
        };
        let config = PageConfig::default().with_overrides(&overrides);
        assert!(config.filters.apply_to_results);
        assert!(!config.filters.clamp_ranges);
        assert_eq!(config.catalog.simulated_latency_ms, 0);
    }

    #[test]
    fn test_validate_rejects_inverted_domain() {
        let mut config = PageConfig::default();
        config.filters.price = RangeDomain { min: 100, max: 10, step: 1 };
        assert!(config.validate().is_err());

        let mut config = PageConfig::default();
        config.filters.frequency.step = 0;
        assert!(config.validate().is_err());
    }
}
