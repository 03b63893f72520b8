//! Page configuration: embedded defaults plus query-string overrides.

use contracts::shared::config::{load_config, ConfigOverrides, PageConfig};
use web_sys::window;

/// Parse overrides such as `?apply_filters=true&latency_ms=0`.
/// Malformed query strings are ignored.
pub fn parse_overrides(search: &str) -> ConfigOverrides {
    match serde_qs::from_str::<ConfigOverrides>(search.trim_start_matches('?')) {
        Ok(overrides) => overrides,
        Err(e) => {
            log::warn!("Ignoring query string overrides: {}", e);
            ConfigOverrides::default()
        }
    }
}

/// Конфигурация для текущей загрузки страницы
pub fn resolve_page_config() -> PageConfig {
    let base = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid, using defaults: {:#}", e);
            PageConfig::default()
        }
    };

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if search.is_empty() {
        return base;
    }

    let overrides = parse_overrides(&search);
    log::debug!("Configuration overrides: {:?}", overrides);
    base.with_overrides(&overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let overrides = parse_overrides("?apply_filters=true&clamp_ranges=false&latency_ms=0");
        assert_eq!(overrides.apply_filters, Some(true));
        assert_eq!(overrides.clamp_ranges, Some(false));
        assert_eq!(overrides.latency_ms, Some(0));
    }

    #[test]
    fn test_parse_overrides_ignores_unknown_keys() {
        let overrides = parse_overrides("utm_source=mail");
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn test_parse_overrides_malformed_value() {
        let overrides = parse_overrides("latency_ms=soon");
        assert_eq!(overrides, ConfigOverrides::default());
    }
}
