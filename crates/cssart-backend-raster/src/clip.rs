//! Clip regions in pixel space.

use cssart_spec::{ClipShape, Point};

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// A clip shape resolved against a concrete box.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipRegion {
    Polygon(Vec<(f64, f64)>),
    Ellipse {
        center: (f64, f64),
        radius_x: f64,
        radius_y: f64,
    },
}

fn resolve_point(p: &Point, width: f64, height: f64) -> (f64, f64) {
    (p.x / 100.0 * width, p.y / 100.0 * height)
}

impl ClipRegion {
    /// Resolve percentages against a `width x height` box.
    ///
    /// Circle radii are relative to `sqrt(w² + h²) / sqrt(2)`; ellipse radii
    /// are relative to the width and height respectively.
    pub fn resolve(shape: &ClipShape, width: f64, height: f64) -> Self {
        match shape {
            ClipShape::Circle { radius, center } => {
                let reference = width.hypot(height) / std::f64::consts::SQRT_2;
                let r = radius / 100.0 * reference;
                ClipRegion::Ellipse {
                    center: resolve_point(center, width, height),
                    radius_x: r,
                    radius_y: r,
                }
            }
            ClipShape::Ellipse {
                radius_x,
                radius_y,
                center,
            } => ClipRegion::Ellipse {
                center: resolve_point(center, width, height),
                radius_x: radius_x / 100.0 * width,
                radius_y: radius_y / 100.0 * height,
            },
            _ => {
                let points = shape
                    .polygon_points()
                    .unwrap_or(&[])
                    .iter()
                    .map(|p| resolve_point(p, width, height))
                    .collect();
                ClipRegion::Polygon(points)
            }
        }
    }

    /// Whether the point lies inside the region (nonzero winding for
    /// polygons).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            ClipRegion::Polygon(points) => winding_number(points, x, y) != 0,
            ClipRegion::Ellipse {
                center,
                radius_x,
                radius_y,
            } => {
                if *radius_x <= 0.0 || *radius_y <= 0.0 {
                    return false;
                }
                let dx = (x - center.0) / radius_x;
                let dy = (y - center.1) / radius_y;
                dx * dx + dy * dy <= 1.0
            }
        }
    }

    /// Clear every pixel whose center falls outside the region.
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        for y in 0..buffer.height {
            for x in 0..buffer.width {
                if !self.contains(x as f64 + 0.5, y as f64 + 0.5) {
                    buffer.set(x, y, Color::transparent());
                }
            }
        }
    }
}

fn is_left(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (p.0 - a.0) * (b.1 - a.1)
}

fn winding_number(points: &[(f64, f64)], x: f64, y: f64) -> i32 {
    let mut winding = 0;
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if a.1 <= y {
            if b.1 > y && is_left(a, b, (x, y)) > 0.0 {
                winding += 1;
            }
        } else if b.1 <= y && is_left(a, b, (x, y)) < 0.0 {
            winding -= 1;
        }
    }
    winding
}
