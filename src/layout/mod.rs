//! Kite layout: configuration, geometry and text placement
//!
//! This module turns a wedge count and a [`DiagramConfig`] into the numbers
//! the renderer needs. It has no knowledge of SVG.

pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod types;

pub use config::DiagramConfig;
pub use error::ConfigError;
pub use geometry::{KiteGeometry, Wedge};
pub use placement::{anchor_for, is_left_half, TextPlacement, TextRole};
pub use types::{Point, TextAnchor};
