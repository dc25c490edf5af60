//! Core plugin traits.

use crate::model::value::PropertyValue;

/// Base trait for all plugins.
pub trait Plugin: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> String;
    fn version(&self) -> (u32, u32, u32);
}

/// Plugin trait for value converters.
///
/// A converter maps a [`PropertyValue`] to a text form and back. Both
/// directions are total: input the converter cannot handle produces an
/// empty string or an absent value, never an error.
pub trait ValueConverterPlugin: Plugin {
    /// Whether `to_text` can render this value.
    fn supports_to_text(&self, _value: &PropertyValue) -> bool {
        true
    }

    /// Whether `from_text` can be attempted on this text.
    fn supports_from_text(&self, _text: &str) -> bool {
        true
    }

    /// Render the value as text. Unsupported input yields `""`.
    fn to_text(&self, value: &PropertyValue) -> String;

    /// Parse text back into a value. Unparseable input yields `None`.
    fn from_text(&self, text: &str) -> Option<PropertyValue>;
}
