//! Kite Diagram - circular word diagrams rendered as SVG
//!
//! This library aligns up to three word lists onto the wedges of a circular
//! "kite diagram" and renders the result as an SVG document.
//!
//! # Example
//!
//! ```rust
//! use kite_diagram::{render, WordTable};
//!
//! let inner = vec!["north".to_string(), "east".to_string()];
//! let table = WordTable::align(&inner, &[], &[]);
//! let svg = render(&table).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("north"));
//! ```

pub mod input;
pub mod layout;
pub mod renderer;
pub mod stylesheet;
pub mod words;

pub use input::{parse_font_size, read_font_size, read_word_set};
pub use layout::{ConfigError, DiagramConfig, KiteGeometry};
pub use renderer::{render_svg, SvgConfig};
pub use stylesheet::Stylesheet;
pub use words::{WedgeWords, WordSet, WordTable};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The diagram configuration violates its invariants
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The output could not be written
    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Geometry and font size
    pub diagram: DiagramConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for outline and text styling
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagram configuration
    pub fn with_diagram(mut self, config: DiagramConfig) -> Self {
        self.diagram = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render a word table to SVG with default configuration
pub fn render(table: &WordTable) -> Result<String, RenderError> {
    render_with_config(table, &RenderConfig::default())
}

/// Render a word table to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use kite_diagram::{render_with_config, DiagramConfig, RenderConfig, WordTable};
///
/// let config = RenderConfig::new()
///     .with_diagram(DiagramConfig::new().with_font_size(16).with_radii(300, 260));
///
/// let svg = render_with_config(&WordTable::empty(), &config).unwrap();
/// assert!(svg.contains("16px"));
/// ```
pub fn render_with_config(table: &WordTable, config: &RenderConfig) -> Result<String, RenderError> {
    config.diagram.validate()?;

    let geometry = KiteGeometry::new(table.len(), &config.diagram);
    log::info!(
        "canvas = {}, n = {}, angle = {} deg, width = {}",
        geometry.canvas_size,
        geometry.wedge_count,
        geometry.angle_deg,
        geometry.half_width
    );

    Ok(render_svg(
        table,
        &geometry,
        &config.diagram,
        &config.svg,
        &config.stylesheet,
    ))
}

/// Render a word table and write it to `path`
///
/// The file is created (or truncated), written and flushed before returning.
pub fn write_diagram(
    path: &Path,
    table: &WordTable,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let svg = render_with_config(table, config)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(svg.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::info!("diagram written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_table() {
        let svg = render(&WordTable::empty()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches("<path").count(), 6);
    }

    #[test]
    fn test_render_rejects_invalid_radii() {
        let config = RenderConfig::new().with_diagram(DiagramConfig::new().with_radii(100, 200));
        let err = render_with_config(&WordTable::empty(), &config).unwrap_err();
        assert!(matches!(err, RenderError::Config(ConfigError::InvalidRadii { .. })));
    }

    #[test]
    fn test_render_uses_table_geometry() {
        let table = WordTable::align(&vec![String::from("w"); 9], &[], &[]);
        let config = RenderConfig::new()
            .with_diagram(DiagramConfig::new().with_radii(120, 90).with_canvas_scale(3.0));

        let svg = render_with_config(&table, &config).unwrap();
        let geometry = KiteGeometry::new(table.len(), &config.diagram);
        let expected = render_svg(
            &table,
            &geometry,
            &config.diagram,
            &config.svg,
            &config.stylesheet,
        );

        assert_eq!(svg, expected);
        assert!(svg.contains(r#"viewBox="-180 -180 360 360""#));
        assert!(svg.contains(r#"transform="rotate(40)""#));
    }

    #[test]
    fn test_render_rejects_zero_font_size() {
        let config = RenderConfig::new().with_diagram(DiagramConfig::new().with_font_size(0));
        let err = render_with_config(&WordTable::empty(), &config).unwrap_err();
        assert!(matches!(err, RenderError::Config(ConfigError::InvalidFontSize(0))));
    }

    #[test]
    fn test_render_with_svg_config() {
        let config = RenderConfig::new().with_svg(SvgConfig::new().with_standalone(false));
        let svg = render_with_config(&WordTable::empty(), &config).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_render_escapes_words() {
        let table = WordTable::align(&["R&D".to_string()], &["<x>".to_string()], &[]);
        let svg = render(&table).unwrap();
        assert!(svg.contains("R&amp;D"));
        assert!(svg.contains("&lt;x&gt;"));
    }
}
