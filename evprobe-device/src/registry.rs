// Code registry
// Bidirectional lookup between numeric evdev codes and their symbolic names

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use evprobe_transport::protocol::ev;

use crate::tables;

/// Name reported for codes the registry does not know
///
/// Not a valid table name, so it never matches a catalogued code (the header
/// has a real `KEY_UNKNOWN`).
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Name tables for bus types, categories and per-category features
///
/// Lookups for unknown keys return `None`; the registry never guesses.
#[derive(Debug, Default)]
pub struct CodeRegistry {
    bus_types: HashMap<u16, &'static str>,
    bus_types_by_name: HashMap<&'static str, u16>,
    categories: HashMap<u16, &'static str>,
    categories_by_name: HashMap<&'static str, u16>,
    /// Features indexed by (category, code)
    features: HashMap<(u16, u16), &'static str>,
    /// Features indexed by (category, name)
    features_by_name: HashMap<(u16, &'static str), u16>,
}

impl CodeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the kernel tables pre-loaded
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.load_builtins();
        registry
    }

    /// Load all builtin tables
    pub fn load_builtins(&mut self) {
        for &(code, name) in tables::BUS_TYPES {
            self.register_bus_type(code, name);
        }
        for &(code, name) in tables::CATEGORIES {
            self.register_category(code, name);
        }

        let features = [
            (ev::SYN, tables::SYN_CODES),
            (ev::KEY, tables::KEY_CODES),
            (ev::REL, tables::REL_CODES),
            (ev::ABS, tables::ABS_CODES),
            (ev::MSC, tables::MSC_CODES),
            (ev::SW, tables::SW_CODES),
            (ev::LED, tables::LED_CODES),
            (ev::SND, tables::SND_CODES),
            (ev::REP, tables::REP_CODES),
        ];
        for (category, table) in features {
            for &(code, name) in table {
                self.register_feature(category, code, name);
            }
        }
    }

    pub fn register_bus_type(&mut self, code: u16, name: &'static str) {
        self.bus_types.insert(code, name);
        self.bus_types_by_name.insert(name, code);
    }

    pub fn register_category(&mut self, code: u16, name: &'static str) {
        self.categories.insert(code, name);
        self.categories_by_name.insert(name, code);
    }

    pub fn register_feature(&mut self, category: u16, code: u16, name: &'static str) {
        self.features.insert((category, code), name);
        self.features_by_name.insert((category, name), code);
    }

    pub fn bus_type_name(&self, code: u16) -> Option<&'static str> {
        self.bus_types.get(&code).copied()
    }

    pub fn bus_type_code(&self, name: &str) -> Option<u16> {
        self.bus_types_by_name.get(name).copied()
    }

    pub fn category_name(&self, code: u16) -> Option<&'static str> {
        self.categories.get(&code).copied()
    }

    pub fn category_code(&self, name: &str) -> Option<u16> {
        self.categories_by_name.get(name).copied()
    }

    pub fn feature_name(&self, category: u16, code: u16) -> Option<&'static str> {
        self.features.get(&(category, code)).copied()
    }

    pub fn feature_code(&self, category: u16, name: &str) -> Option<u16> {
        self.features_by_name.get(&(category, name)).copied()
    }

    /// All (code, name) pairs registered for a category, ordered by code
    pub fn features_of(&self, category: u16) -> Vec<(u16, &'static str)> {
        let mut features: Vec<_> = self
            .features
            .iter()
            .filter(|((cat, _), _)| *cat == category)
            .map(|(&(_, code), &name)| (code, name))
            .collect();
        features.sort_unstable();
        features
    }

    /// Number of registered feature names across all categories
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Global code registry singleton
static REGISTRY: OnceLock<Arc<CodeRegistry>> = OnceLock::new();

/// Get the global code registry
/// Initializes with the builtin tables on first access
pub fn code_registry() -> Arc<CodeRegistry> {
    REGISTRY
        .get_or_init(|| Arc::new(CodeRegistry::with_builtins()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_lookups() {
        let registry = CodeRegistry::with_builtins();

        assert_eq!(registry.category_name(ev::LED), Some("LED"));
        assert_eq!(registry.category_code("KEY"), Some(ev::KEY));
        assert_eq!(registry.bus_type_name(0x03), Some("USB"));
        assert_eq!(registry.bus_type_code("BLUETOOTH"), Some(0x05));
        assert_eq!(registry.feature_name(ev::LED, 0x02), Some("SCROLLL"));
        assert_eq!(registry.feature_name(ev::KEY, 1), Some("ESC"));
        assert_eq!(registry.feature_code(ev::KEY, "A"), Some(30));
        assert_eq!(registry.feature_code(ev::REL, "WHEEL"), Some(0x08));
        assert_eq!(registry.feature_code(ev::ABS, "MT_SLOT"), Some(0x2f));
    }

    #[test]
    fn test_buttons_keep_prefix() {
        let registry = CodeRegistry::with_builtins();
        assert_eq!(registry.feature_name(ev::KEY, 0x110), Some("BTN_LEFT"));
        assert_eq!(registry.feature_code(ev::KEY, "LEFT"), Some(0x69));
        assert_eq!(registry.feature_code(ev::KEY, "BTN_LEFT"), Some(0x110));
    }

    #[test]
    fn test_unknown_codes_are_absent() {
        let registry = CodeRegistry::with_builtins();
        assert_eq!(registry.category_name(0x1e), None);
        assert_eq!(registry.bus_type_name(0xff), None);
        assert_eq!(registry.feature_name(ev::LED, 0x0f), None);
        assert_eq!(registry.feature_code(ev::LED, "ESC"), None);
        assert_eq!(registry.category_code("led"), None);
    }

    #[test]
    fn test_feature_names_round_trip() {
        let registry = CodeRegistry::with_builtins();
        let categories = [
            ev::SYN,
            ev::KEY,
            ev::REL,
            ev::ABS,
            ev::MSC,
            ev::SW,
            ev::LED,
            ev::SND,
            ev::REP,
        ];
        for category in categories {
            let features = registry.features_of(category);
            assert!(!features.is_empty(), "no names for category {category}");
            let mut seen = HashSet::new();
            for (code, name) in features {
                assert!(seen.insert(name), "duplicate name {name} in category {category}");
                assert_eq!(registry.feature_code(category, name), Some(code));
            }
        }
    }

    #[test]
    fn test_tables_have_no_duplicate_names() {
        // A duplicate would overwrite the reverse index and break the round trip
        let registry = CodeRegistry::with_builtins();
        assert_eq!(registry.features.len(), registry.features_by_name.len());
        assert_eq!(registry.categories.len(), registry.categories_by_name.len());
        assert_eq!(registry.bus_types.len(), registry.bus_types_by_name.len());
    }

    #[test]
    fn test_sentinel_is_not_a_table_name() {
        let registry = CodeRegistry::with_builtins();
        assert!(registry.features.values().all(|&name| name != UNKNOWN_NAME));
        assert!(registry.categories.values().all(|&name| name != UNKNOWN_NAME));
        assert!(registry.bus_types.values().all(|&name| name != UNKNOWN_NAME));

        // KEY_UNKNOWN is a real key and keeps its name
        assert_eq!(registry.feature_name(ev::KEY, 0x0f0), Some("UNKNOWN"));
        assert_eq!(registry.feature_code(ev::KEY, UNKNOWN_NAME), None);
    }

    #[test]
    fn test_fixture_registry() {
        let mut registry = CodeRegistry::new();
        registry.register_category(0x11, "LED");
        registry.register_feature(0x11, 0x00, "NUML");
        assert_eq!(registry.feature_count(), 1);
        assert_eq!(registry.category_name(0x01), None);
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = code_registry();
        let b = code_registry();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
