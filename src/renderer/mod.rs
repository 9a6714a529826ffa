//! SVG renderer for kite diagrams
//!
//! This module takes a word table and the diagram geometry and produces an
//! SVG string with CSS classes for styling.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
