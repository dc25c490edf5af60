use crate::model::color::Color;
use crate::model::value::PropertyValue;
use crate::plugin::{Plugin, ValueConverterPlugin};

/// Converts a color to/from decimal triplet text, e.g. `255, 0, 128`.
/// Alpha is not represented; parsed colors are fully opaque.
pub struct RgbColorConverter;

impl RgbColorConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_color(&self, color: &Color) -> String {
        format!("{}, {}, {}", color.r, color.g, color.b)
    }

    /// Parse exactly three decimal components in 0-255, separated by
    /// commas and/or whitespace.
    pub fn parse_color(&self, text: &str) -> Option<Color> {
        if text.trim().is_empty() {
            return None;
        }
        let components: Vec<u8> = text
            .split(&[',', ' '][..])
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        match components[..] {
            [r, g, b] => Some(Color::rgb(r, g, b)),
            _ => None,
        }
    }
}

impl Plugin for RgbColorConverter {
    fn id(&self) -> &'static str {
        "color.rgb"
    }

    fn name(&self) -> String {
        "RGB Color".to_string()
    }

    fn version(&self) -> (u32, u32, u32) {
        (0, 1, 0)
    }
}

impl ValueConverterPlugin for RgbColorConverter {
    fn to_text(&self, value: &PropertyValue) -> String {
        match value.get_as::<Color>() {
            Some(color) => self.format_color(&color),
            None => String::new(),
        }
    }

    fn from_text(&self, text: &str) -> Option<PropertyValue> {
        self.parse_color(text).map(PropertyValue::Color)
    }
}
