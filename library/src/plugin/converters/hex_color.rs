use crate::model::color::Color;
use crate::model::value::PropertyValue;
use crate::plugin::{Plugin, ValueConverterPlugin};

/// Converts a color to/from `#RRGGBB` text. For example `#000000` is
/// Color(0, 0, 0) and `#FF00FF` is Color(255, 0, 255).
///
/// With alpha included the form is `#RRGGBBAA`, the alpha byte appended
/// after blue: `#FF00FF64` is Color(255, 0, 255, 100).
pub struct HexColorConverter {
    alpha_included: bool,
}

impl HexColorConverter {
    /// Creates a converter that does not include the alpha value.
    pub fn new() -> Self {
        Self {
            alpha_included: false,
        }
    }

    /// Creates a converter with alpha inclusion explicitly set.
    pub fn with_alpha(alpha_included: bool) -> Self {
        Self { alpha_included }
    }

    pub fn is_alpha_included(&self) -> bool {
        self.alpha_included
    }

    /// Not synchronized; callers sharing a converter across threads must
    /// provide their own locking around this.
    pub fn set_alpha_included(&mut self, alpha_included: bool) {
        self.alpha_included = alpha_included;
    }

    /// Render a color as uppercase hex text, two zero-padded digits per
    /// channel, alpha last and only when included.
    pub fn format_color(&self, color: &Color) -> String {
        let mut text = format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b);
        if self.alpha_included {
            text.push_str(&format!("{:02X}", color.a));
        }
        text
    }

    /// Parse hex text into a color.
    ///
    /// A leading `#` is optional and both digit cases are accepted. Text
    /// longer than the channel window (6 digits, 8 with alpha) keeps only
    /// its trailing characters. A window of 6 or fewer digits parses as
    /// RGB with opaque alpha even when alpha is included.
    pub fn parse_color(&self, text: &str) -> Option<Color> {
        // Trimming is only the emptiness test; the raw text is what parses.
        if text.trim().is_empty() {
            return None;
        }
        if !text.is_ascii() {
            return None;
        }
        let text = text.strip_prefix('#').unwrap_or(text);
        let window = if self.alpha_included { 8 } else { 6 };
        let text = if text.len() > window {
            &text[text.len() - window..]
        } else {
            text
        };
        let value = u32::from_str_radix(text, 16).ok()?;
        if self.alpha_included && text.len() > 6 {
            Some(Color::from_rgba_u32(value))
        } else {
            Some(Color::from_rgb_u32(value))
        }
    }
}

impl Plugin for HexColorConverter {
    fn id(&self) -> &'static str {
        if self.alpha_included {
            "color.hex_alpha"
        } else {
            "color.hex"
        }
    }

    fn name(&self) -> String {
        "Hex Color".to_string()
    }

    fn version(&self) -> (u32, u32, u32) {
        (0, 1, 0)
    }
}

impl ValueConverterPlugin for HexColorConverter {
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
