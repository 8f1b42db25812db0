//! 2D affine transforms about the box center.

use cssart_spec::Transform;

/// Linear part `[a, b, c, d]` plus a translation, applied about the box
/// center: `screen = center + translate + M · (local - center)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub matrix: [f64; 4],
    pub translate: (f64, f64),
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        matrix: [1.0, 0.0, 0.0, 1.0],
        translate: (0.0, 0.0),
    };

    /// `rotate(..) scale(..) skew(..)` of a layer.
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            matrix: transform.matrix(),
            translate: (0.0, 0.0),
        }
    }

    /// A pure rotation, clockwise in degrees.
    pub fn rotation(degrees: f64) -> Self {
        Self::from_transform(&Transform::new(degrees, 1.0, 0.0, 0.0))
    }

    /// A vertical translation in pixels.
    pub fn translate_y(dy: f64) -> Self {
        Self {
            translate: (0.0, dy),
            ..Self::IDENTITY
        }
    }

    /// Multiply lengths by `scale` (CSS px to output pixels).
    pub fn scaled_translation(&self, scale: f64) -> Self {
        Self {
            matrix: self.matrix,
            translate: (self.translate.0 * scale, self.translate.1 * scale),
        }
    }

    pub fn determinant(&self) -> f64 {
        let [a, b, c, d] = self.matrix;
        a * d - b * c
    }

    /// Map a screen point back to layer-local coordinates. `None` when the
    /// matrix is singular and the layer collapses to nothing.
    pub fn inverse_map(&self, center: (f64, f64), x: f64, y: f64) -> Option<(f64, f64)> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let [a, b, c, d] = self.matrix;
        let u = x - center.0 - self.translate.0;
        let v = y - center.1 - self.translate.1;
        Some((
            center.0 + (d * u - c * v) / det,
            center.1 + (-b * u + a * v) / det,
        ))
    }
}
