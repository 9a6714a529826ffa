//! Kite geometry
//!
//! All kites share the same local shape: they start at the diagram center,
//! widen to `half_width` on either side at the inner radius and close at a
//! tip on the outer radius. Wedge `i` is that shape rotated clockwise by
//! `i * angle_deg` around the center, so wedge 0 points to "3 o'clock".

use std::f64::consts::PI;

use super::config::DiagramConfig;
use super::types::Point;

/// Geometry shared by all wedges of one diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KiteGeometry {
    /// Number of wedges
    pub wedge_count: usize,
    /// Angular step between consecutive wedge center lines
    pub angle_deg: f64,
    /// Perpendicular offset of the kite shoulders from the center line
    pub half_width: f64,
    /// Radial distance between the shoulders and the tip
    pub brim: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Width and height of the square canvas
    pub canvas_size: f64,
}

/// Placement of one wedge around the center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    /// Clockwise rotation of the wedge center line, in degrees
    pub rotation: f64,
    /// Rotation of the line halfway to the next wedge, in degrees
    pub sub_rotation: f64,
}

impl KiteGeometry {
    /// Compute the geometry for `wedge_count` wedges
    ///
    /// `wedge_count` must be at least 3 for the kites to be convex; callers
    /// pass the length of a [`WordTable`](crate::WordTable), which is at
    /// least 6.
    pub fn new(wedge_count: usize, config: &DiagramConfig) -> Self {
        let n = wedge_count as f64;
        let inner_radius = f64::from(config.inner_radius);
        let outer_radius = f64::from(config.outer_radius);

        Self {
            wedge_count,
            angle_deg: 360.0 / n,
            half_width: inner_radius * (PI / n).tan(),
            brim: config.brim(),
            inner_radius,
            outer_radius,
            canvas_size: config.canvas_size(),
        }
    }

    /// Placement of wedge `index`
    pub fn wedge(&self, index: usize) -> Wedge {
        let rotation = self.angle_deg * index as f64;
        Wedge {
            index,
            rotation,
            sub_rotation: rotation + self.angle_deg / 2.0,
        }
    }

    /// Placements of all wedges in clockwise order
    pub fn wedges(&self) -> impl Iterator<Item = Wedge> + '_ {
        (0..self.wedge_count).map(|i| self.wedge(i))
    }

    /// Corners of the unrotated kite: center, upper shoulder, tip, lower shoulder
    pub fn outline(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.inner_radius, -self.half_width),
            Point::new(self.outer_radius, 0.0),
            Point::new(self.inner_radius, self.half_width),
        ]
    }
}
