use super::options::{FilterFamily, SPEC_FREQUENCY, SPEC_PLATFORM, SPEC_SOCKET};
use contracts::domain::a001_component::Component;
use contracts::shared::config::{FiltersConfig, RangeDomain};

/// Shown to the shopper whenever the catalog cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load components.";

// ============================================================================
// Множественный выбор
// ============================================================================

/// Checked labels of one multi-select filter, in the order they were checked
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    candidates: &'static [&'static str],
    selected: Vec<&'static str>,
}

impl SelectionSet {
    pub fn new(candidates: &'static [&'static str]) -> Self {
        Self {
            candidates,
            selected: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &'static [&'static str] {
        self.candidates
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|s| *s == label)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check the label if unchecked, uncheck it otherwise.
    /// Labels outside the candidate list are ignored.
    pub fn toggle(&mut self, label: &str) {
        if let Some(pos) = self.selected.iter().position(|s| *s == label) {
            self.selected.remove(pos);
            return;
        }
        match self.candidates.iter().find(|c| **c == label) {
            Some(candidate) => self.selected.push(*candidate),
            None => log::warn!("Ignoring unknown filter label {:?}", label),
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// True when nothing is checked or some checked label satisfies `pred`
    pub fn accepts(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.is_empty() || self.selected.iter().any(|label| pred(label))
    }
}

// ============================================================================
// Фильтры-диапазоны
// ============================================================================

/// `[min, max]` slider filter; min stays at the domain floor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeFilter {
    domain: RangeDomain,
    max: i64,
}

impl RangeFilter {
    pub fn new(domain: RangeDomain) -> Self {
        Self {
            domain,
            max: domain.max,
        }
    }

    pub fn domain(&self) -> RangeDomain {
        self.domain
    }

    pub fn min(&self) -> i64 {
        self.domain.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn bounds(&self) -> [i64; 2] {
        [self.domain.min, self.max]
    }

    /// Сохраняет значение как есть, даже вне диапазона
    pub fn set_max(&mut self, value: i64) {
        self.max = value;
    }

    pub fn set_max_clamped(&mut self, value: i64) {
        self.max = value.clamp(self.domain.min, self.domain.max);
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.domain.min as f64 && value <= self.max as f64
    }

    pub fn max_label(&self, unit: &str) -> String {
        format!("{} {}", self.max, unit)
    }
}

/// Parse a slider value; the input element reports it as text
pub fn parse_slider_value(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Leading number of a spec value such as `"4.2 GHz"` or `"3,5 GHz"`
fn leading_number(value: &str) -> Option<f64> {
    value
        .split_whitespace()
        .next()
        .and_then(|n| n.replace(',', ".").parse::<f64>().ok())
}

// ============================================================================
// Filter state
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKind {
    Price,
    Frequency,
}

/// Every sidebar control of the page
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub models: SelectionSet,
    pub sockets: SelectionSet,
    pub platforms: SelectionSet,
    pub price: RangeFilter,
    pub frequency: RangeFilter,
    pub brand: Option<String>,
    pub query: String,
    clamp_ranges: bool,
}

impl FilterState {
    pub fn new(config: &FiltersConfig) -> Self {
        Self {
            models: SelectionSet::new(FilterFamily::Model.candidates()),
            sockets: SelectionSet::new(FilterFamily::Socket.candidates()),
            platforms: SelectionSet::new(FilterFamily::Platform.candidates()),
            price: RangeFilter::new(config.price),
            frequency: RangeFilter::new(config.frequency),
            brand: None,
            query: String::new(),
            clamp_ranges: config.clamp_ranges,
        }
    }

    pub fn family(&self, family: FilterFamily) -> &SelectionSet {
        match family {
            FilterFamily::Model => &self.models,
            FilterFamily::Socket => &self.sockets,
            FilterFamily::Platform => &self.platforms,
        }
    }

    fn family_mut(&mut self, family: FilterFamily) -> &mut SelectionSet {
        match family {
            FilterFamily::Model => &mut self.models,
            FilterFamily::Socket => &mut self.sockets,
            FilterFamily::Platform => &mut self.platforms,
        }
    }

    pub fn toggle(&mut self, family: FilterFamily, label: &str) {
        self.family_mut(family).toggle(label);
    }

    pub fn clear(&mut self, family: FilterFamily) {
        self.family_mut(family).clear();
    }

    pub fn range(&self, kind: RangeKind) -> &RangeFilter {
        match kind {
            RangeKind::Price => &self.price,
            RangeKind::Frequency => &self.frequency,
        }
    }

    pub fn set_range_max(&mut self, kind: RangeKind, value: i64) {
        let clamp = self.clamp_ranges;
        let range = match kind {
            RangeKind::Price => &mut self.price,
            RangeKind::Frequency => &mut self.frequency,
        };
        if clamp {
            range.set_max_clamped(value);
        } else {
            range.set_max(value);
        }
    }

    /// Apply raw slider text; unparsable input leaves the range untouched
    pub fn apply_slider_input(&mut self, kind: RangeKind, raw: &str) {
        match parse_slider_value(raw) {
            Some(value) => self.set_range_max(kind, value),
            None => log::warn!("Ignoring slider value {:?} for {:?}", raw, kind),
        }
    }

    /// An empty value resets the brand to "Sélectionner"
    pub fn set_brand(&mut self, brand: String) {
        self.brand = if brand.is_empty() { None } else { Some(brand) };
    }

    /// Сбросить бренд, которого нет в текущей категории.
    /// Возвращает true, если бренд был сброшен.
    pub fn retain_brand(&mut self, available: &[String]) -> bool {
        match &self.brand {
            Some(brand) if !available.contains(brand) => {
                log::debug!("Brand {:?} not offered here, resetting", brand);
                self.brand = None;
                true
            }
            _ => false,
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Whether a component passes every sidebar filter.
    /// A component without a frequency spec skips the frequency check.
    pub fn matches(&self, component: &Component) -> bool {
        if let Some(brand) = &self.brand {
            if &component.brand != brand {
                return false;
            }
        }

        if !self.price.contains(component.price) {
            return false;
        }

        if let Some(freq) = component.spec(SPEC_FREQUENCY).and_then(leading_number) {
            if !self.frequency.contains(freq) {
                return false;
            }
        }

        let name = component.name.as_str();
        if !self.models.accepts(|model| {
            name == model || name.starts_with(&format!("{} ", model)) || name.starts_with(&format!("{}-", model))
        }) {
            return false;
        }

        let socket = component.spec(SPEC_SOCKET);
        if !self.sockets.accepts(|s| socket == Some(s)) {
            return false;
        }

        let platform = component.spec(SPEC_PLATFORM);
        if !self.platforms.accepts(|p| platform == Some(p)) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let haystack = format!("{} {}", component.name, component.specs_summary()).to_lowercase();
            if !haystack.contains(&query) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, items: &[Component]) -> Vec<Component> {
        items.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

// ============================================================================
// Состояние каталога
// ============================================================================

/// Loaded collection plus the bookkeeping of the in-flight request
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Component>,
    pub is_loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl CatalogState {
    /// Start a load and return its token. Any earlier token becomes stale.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a load result. Returns false when the token is stale and the
    /// result was dropped.
    pub fn finish_load(&mut self, token: u64, result: Result<Vec<Component>, String>) -> bool {
        if token != self.generation {
            log::debug!(
                "Dropping stale catalog response (token {}, current {})",
                token,
                self.generation
            );
            return false;
        }

        match result {
            Ok(items) => {
                log::debug!("Catalog loaded: {} components", items.len());
                self.items = items;
            }
            Err(e) => {
                log::error!("Catalog load failed: {}", e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.is_loading = false;
        true
    }

    /// Категория не найдена: пустой список, загрузок нет
    pub fn reset_empty(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.is_loading = false;
        self.error = None;
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}
