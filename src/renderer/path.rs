//! Kite outline paths
//!
//! Converts the kite geometry into an SVG path `d` attribute string. The
//! outline starts at the center and walks the remaining corners with relative
//! line commands.

use crate::layout::{KiteGeometry, Point};

/// A segment in a kite outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to an absolute starting point
    MoveTo(Point),
    /// Straight line by a relative offset
    LineBy(Point),
    /// Close path back to start
    Close,
}

/// An outline ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// The outline of an unrotated kite
    pub fn kite(geometry: &KiteGeometry) -> Self {
        let corners = geometry.outline();
        let mut segments = Vec::with_capacity(corners.len() + 1);
        segments.push(PathSegment::MoveTo(corners[0]));
        segments.extend(
            corners
                .windows(2)
                .map(|w| PathSegment::LineBy(Point::new(w[1].x - w[0].x, w[1].y - w[0].y))),
        );
        segments.push(PathSegment::Close);
        Self { segments }
    }

    /// Convert to SVG path `d` attribute string
    ///
    /// Consecutive relative lines share one `l` command.
    pub fn to_svg_d(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.segments.len());
        let mut in_line = false;

        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    parts.push(format!("M{} {}", fmt_num(p.x), fmt_num(p.y)));
                    in_line = false;
                }
                PathSegment::LineBy(p) => {
                    let cmd = if in_line { "" } else { "l" };
                    parts.push(format!("{}{},{}", cmd, fmt_num(p.x), fmt_num(p.y)));
                    in_line = true;
                }
                PathSegment::Close => {
                    parts.push("z".to_string());
                    in_line = false;
                }
            }
        }

        parts.join(" ")
    }
}

/// Format a coordinate with at most three fractional digits
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
