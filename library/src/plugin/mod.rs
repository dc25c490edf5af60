pub mod converters;
mod manager;
mod repository;
mod traits;

pub use converters::{HexColorConverter, RgbColorConverter};
pub use manager::PluginManager;
pub use repository::PluginRepository;
pub use traits::{Plugin, ValueConverterPlugin};
