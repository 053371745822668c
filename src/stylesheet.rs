//! Colour palettes for schematic output
//!
//! A stylesheet maps palette tokens (`stroke`, `background`, ...) to CSS
//! values. The SVG canvas emits every token as a CSS custom property so a
//! schematic can be re-themed without touching the drawing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping palette tokens to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Token name -> CSS value, ordered so output is stable
    pub colors: BTreeMap<String, String>,
}

/// Any other top-level table (e.g. `[metadata]`) is ignored
#[derive(Deserialize)]
struct TomlStylesheet {
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

/// Black strokes on white paper
const DEFAULT_PALETTE: [(&str, &str); 3] = [
    ("background", "#ffffff"),
    ("caption", "#333333"),
    ("stroke", "#000000"),
];

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            colors: parsed.colors,
        })
    }

    /// Value of `token` in this stylesheet, if defined
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Value of `token`, falling back to the default palette and then black
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }
        DEFAULT_PALETTE
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| value.to_string())
            .unwrap_or_else(|| "#000000".to_string())
    }

    /// Overlay another stylesheet's tokens on top of this one
    pub fn merged(mut self, other: Stylesheet) -> Self {
        self.colors.extend(other.colors);
        self
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet {
            colors: DEFAULT_PALETTE
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("stroke"), Some("#000000"));
        assert_eq!(stylesheet.resolve("background"), Some("#ffffff"));
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let empty = Stylesheet {
            colors: BTreeMap::new(),
        };
        assert_eq!(empty.resolve_or_default("background"), "#ffffff");
        assert_eq!(empty.resolve_or_default("unknown-token"), "#000000");
    }

    #[test]
    fn test_parse_toml_ignores_metadata() {
        let toml_str = r##"
[metadata]
name = "Blueprint"

[colors]
stroke = "#ffffff"
background = "#1e3a8a"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.resolve("background"), Some("#1e3a8a"));
    }

    #[test]
    fn test_merged_overrides_defaults() {
        let custom = Stylesheet::from_str("[colors]\nstroke = \"red\"\n").expect("Should parse");
        let merged = Stylesheet::default().merged(custom);
        assert_eq!(merged.resolve("stroke"), Some("red"));
        assert_eq!(merged.resolve("background"), Some("#ffffff"));
    }

    #[test]
    fn test_missing_colors_table_is_empty() {
        let stylesheet = Stylesheet::from_str("[metadata]\nname = \"bare\"\n").expect("Should parse");
        assert!(stylesheet.colors.is_empty());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Stylesheet::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }
}
