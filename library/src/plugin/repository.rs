//! Generic plugin repository and registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::plugin::traits::{Plugin, ValueConverterPlugin};

/// Generic container for plugins of a specific type.
pub struct PluginRepository<T: ?Sized> {
    pub plugins: HashMap<String, Arc<T>>,
}

impl<T: ?Sized + Plugin> PluginRepository<T> {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    pub fn register(&mut self, plugin: Arc<T>) {
        self.plugins.insert(plugin.id().to_string(), plugin);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<T>> {
        self.plugins.get(id)
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<T>> {
        self.plugins.values()
    }
}

/// Internal registry holding all plugin repositories.
pub(crate) struct ConverterRegistry {
    pub converter_plugins: PluginRepository<dyn ValueConverterPlugin>,
}
