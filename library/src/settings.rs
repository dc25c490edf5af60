//! Converter configuration loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Settings for the built-in converters.
///
/// `alpha_included` selects whether the default hex converter emits and
/// parses an alpha channel segment.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterSettings {
    #[serde(default)]
    pub alpha_included: bool,
}

impl ConverterSettings {
    pub fn from_json_str(json_str: &str) -> Result<Self, LibraryError> {
        let settings = serde_json::from_str(json_str)?;
        Ok(settings)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LibraryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_alpha() {
        assert!(!ConverterSettings::default().alpha_included);
    }

    #[test]
    fn test_from_json_str() {
        let settings = ConverterSettings::from_json_str(r#"{ "alpha_included": true }"#).unwrap();
        assert!(settings.alpha_included);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = ConverterSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, ConverterSettings::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            ConverterSettings::from_json_str("not json"),
            Err(LibraryError::Json(_))
        ));
    }
}
