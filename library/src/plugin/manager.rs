//! Plugin manager for registering and accessing converter plugins.

use std::sync::{Arc, RwLock};

use log::{debug, warn};

use crate::model::value::PropertyValue;
use crate::plugin::repository::{ConverterRegistry, PluginRepository};
use crate::plugin::traits::ValueConverterPlugin;

/// Main plugin manager.
pub struct PluginManager {
    inner: RwLock<ConverterRegistry>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ConverterRegistry {
                converter_plugins: PluginRepository::new(),
            }),
        }
    }

    pub fn register_converter_plugin(&self, plugin: Arc<dyn ValueConverterPlugin>) {
        debug!("Registering converter plugin '{}'", plugin.id());
        let mut inner = self.inner.write().unwrap();
        inner.converter_plugins.register(plugin);
    }

    pub fn get_converter(&self, id: &str) -> Option<Arc<dyn ValueConverterPlugin>> {
        let inner = self.inner.read().unwrap();
        inner.converter_plugins.get(id).cloned()
    }

    /// Get list of all registered converter plugins (id, name).
    pub fn get_converter_plugins(&self) -> Vec<(String, String)> {
        let inner = self.inner.read().unwrap();
        inner
            .converter_plugins
            .values()
            .map(|p| (p.id().to_string(), p.name()))
            .collect()
    }

    /// Render a value with the converter registered under `id`.
    /// An unknown id yields an empty string.
    pub fn to_text(&self, id: &str, value: &PropertyValue) -> String {
        match self.get_converter(id) {
            Some(converter) => converter.to_text(value),
            None => {
                warn!("Unknown converter type: {}", id);
                String::new()
            }
        }
    }

    /// Parse text with the converter registered under `id`.
    /// An unknown id yields no value.
    pub fn from_text(&self, id: &str, text: &str) -> Option<PropertyValue> {
        match self.get_converter(id) {
            Some(converter) => converter.from_text(text),
            None => {
                warn!("Unknown converter type: {}", id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::color::Color;
    use crate::plugin::converters::{HexColorConverter, RgbColorConverter};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn manager_with_builtins() -> PluginManager {
        let manager = PluginManager::new();
        manager.register_converter_plugin(Arc::new(HexColorConverter::new()));
        manager.register_converter_plugin(Arc::new(HexColorConverter::with_alpha(true)));
        manager.register_converter_plugin(Arc::new(RgbColorConverter::new()));
        manager
    }

    #[test]
    fn test_register_and_lookup() {
        init_logger();
        let manager = manager_with_builtins();
        assert!(manager.get_converter("color.hex").is_some());
        assert!(manager.get_converter("color.hex_alpha").is_some());
        assert!(manager.get_converter("color.rgb").is_some());
        assert!(manager.get_converter("color.unknown").is_none());
    }

    #[test]
    fn test_dispatch_by_id() {
        init_logger();
        let manager = manager_with_builtins();
        let value = PropertyValue::from(Color::rgba(255, 0, 255, 100));
        assert_eq!(manager.to_text("color.hex", &value), "#FF00FF");
        assert_eq!(manager.to_text("color.hex_alpha", &value), "#FF00FF64");
        assert_eq!(manager.to_text("color.rgb", &value), "255, 0, 255");
        assert_eq!(
            manager.from_text("color.hex", "#0000FF"),
            Some(PropertyValue::from(Color::rgb(0, 0, 255)))
        );
    }

    #[test]
    fn test_unknown_id_yields_absent_outcome() {
        init_logger();
        let manager = manager_with_builtins();
        let value = PropertyValue::from(Color::rgb(1, 2, 3));
        assert_eq!(manager.to_text("color.unknown", &value), "");
        assert_eq!(manager.from_text("color.unknown", "#010203"), None);
    }

    #[test]
    fn test_converter_listing() {
        init_logger();
        let manager = manager_with_builtins();
        let mut ids: Vec<String> = manager
            .get_converter_plugins()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        assert_eq!(ids, ["color.hex", "color.hex_alpha", "color.rgb"]);
    }
}
