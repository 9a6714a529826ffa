//! Configuration for the diagram geometry

use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;

/// Default font size for all words
pub const DEFAULT_FONT_SIZE: u32 = 12;
/// Default distance from the center to the kite tips
pub const DEFAULT_OUTER_RADIUS: u32 = 200;
/// Default distance from the center to the kite shoulders
pub const DEFAULT_INNER_RADIUS: u32 = 180;
/// Default canvas size as a multiple of the outer radius
pub const DEFAULT_CANVAS_SCALE: f64 = 4.0;

/// Configuration options for diagram geometry
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    /// Font size in pixels for all words
    pub font_size: u32,

    /// Radius of the kite tips
    pub outer_radius: u32,

    /// Radius at which the kites are widest
    pub inner_radius: u32,

    /// Canvas size as a multiple of the outer radius
    pub canvas_scale: f64,
}

/// TOML structure for deserializing a config file
#[derive(Deserialize)]
struct TomlConfig {
    #[serde(default)]
    diagram: TomlDiagram,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct TomlDiagram {
    font_size: Option<u32>,
    outer_radius: Option<u32>,
    inner_radius: Option<u32>,
    canvas_scale: Option<f64>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius: DEFAULT_INNER_RADIUS,
            canvas_scale: DEFAULT_CANVAS_SCALE,
        }
    }
}

impl DiagramConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading diagram config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Keys missing from the `[diagram]` table keep their defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        let d = parsed.diagram;

        let config = Self {
            font_size: d.font_size.unwrap_or(defaults.font_size),
            outer_radius: d.outer_radius.unwrap_or(defaults.outer_radius),
            inner_radius: d.inner_radius.unwrap_or(defaults.inner_radius),
            canvas_scale: d.canvas_scale.unwrap_or(defaults.canvas_scale),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the geometric invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inner_radius == 0 || self.outer_radius <= self.inner_radius {
            return Err(ConfigError::invalid_radii(
                self.outer_radius,
                self.inner_radius,
            ));
        }
        if !self.canvas_scale.is_finite() || self.canvas_scale < 2.0 {
            return Err(ConfigError::InvalidCanvasScale(self.canvas_scale));
        }
        if self.font_size == 0 {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the outer and inner radius
    pub fn with_radii(mut self, outer: u32, inner: u32) -> Self {
        self.outer_radius = outer;
        self.inner_radius = inner;
        self
    }

    /// Set the canvas scale
    pub fn with_canvas_scale(mut self, scale: f64) -> Self {
        self.canvas_scale = scale;
        self
    }

    /// Radial thickness of the band between inner and outer radius
    pub fn brim(&self) -> f64 {
        f64::from(self.outer_radius) - f64::from(self.inner_radius)
    }

    /// Width and height of the square canvas
    pub fn canvas_size(&self) -> f64 {
        self.canvas_scale * f64::from(self.outer_radius)
    }
}
