pub mod error;
pub mod model;
pub mod plugin;
pub mod settings;

use std::sync::Arc;

pub use error::LibraryError;
pub use model::{Color, PropertyValue, TryGetProperty};
pub use plugin::{
    HexColorConverter, Plugin, PluginManager, RgbColorConverter, ValueConverterPlugin,
};
pub use settings::ConverterSettings;

/// Create a plugin manager with the built-in converters registered under
/// their default configuration.
pub fn create_plugin_manager() -> PluginManager {
    create_plugin_manager_with_settings(&ConverterSettings::default())
}

/// Create a plugin manager whose hex converter is configured by
/// `settings`. The converter registers as `color.hex` or
/// `color.hex_alpha` depending on the alpha flag.
pub fn create_plugin_manager_with_settings(settings: &ConverterSettings) -> PluginManager {
    let manager = PluginManager::new();
    manager.register_converter_plugin(Arc::new(HexColorConverter::with_alpha(
        settings.alpha_included,
    )));
    manager.register_converter_plugin(Arc::new(RgbColorConverter::new()));
    manager
}
