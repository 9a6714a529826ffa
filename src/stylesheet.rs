//! Stylesheet support for outline and text styling
//!
//! A stylesheet maps style tokens (`stroke`, `fill`, `text`, ...) to concrete
//! values. Tokens missing from a custom stylesheet fall back to the default
//! ink-on-paper look.

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

/// Outline stroke color
pub const STROKE: &str = "stroke";
/// Outline stroke width
pub const STROKE_WIDTH: &str = "stroke-width";
/// Kite fill
pub const FILL: &str = "fill";
/// Word color
pub const TEXT: &str = "text";
/// Word font family
pub const FONT_FAMILY: &str = "font-family";

/// A stylesheet mapping style tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Style mappings: token name -> CSS value
    pub tokens: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    style: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default style - black outlines on a transparent background
const DEFAULT_STYLE: &str = r##"
[metadata]
name = "ink"

[style]
stroke = "#000000"
stroke-width = "1px"
fill = "none"
text = "#000000"
font-family = "sans-serif"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        log::debug!("loading stylesheet from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            tokens: parsed.style,
        })
    }

    /// Resolve a style token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(|s| s.as_str())
    }

    /// Resolve a style token with fallback to the default style
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for the token
    /// 2. Check the default style for the token
    /// 3. Use `currentColor` for unknown tokens
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(value) = self.resolve(token) {
            return value.to_string();
        }

        let default = Self::default();
        if let Some(value) = default.resolve(token) {
            return value.to_string();
        }

        "currentColor".to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        let parsed: TomlStylesheet =
            toml::from_str(DEFAULT_STYLE).expect("Default style should be valid TOML");
        Stylesheet {
            name: parsed.metadata.and_then(|m| m.name),
            description: None,
            tokens: parsed.style,
        }
    }
}
