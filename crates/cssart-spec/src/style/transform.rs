//! Layer transforms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `rotate(..) scale(..) skew(.., ..)`, always all three, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Rotation in degrees, `[0, 360)`.
    pub rotate: f64,
    /// Uniform scale factor, `[0.5, 1.5)`.
    pub scale: f64,
    /// Horizontal skew in degrees, `[0, 30)`.
    pub skew_x: f64,
    /// Vertical skew in degrees, `[0, 30)`.
    pub skew_y: f64,
}

impl Transform {
    pub const fn new(rotate: f64, scale: f64, skew_x: f64, skew_y: f64) -> Self {
        Self {
            rotate,
            scale,
            skew_x,
            skew_y,
        }
    }

    /// The 2x2 linear part `rotate · scale · skew` as `[a, b, c, d]`,
    /// mapping `(x, y)` to `(a*x + c*y, b*x + d*y)` in y-down coordinates.
    pub fn matrix(&self) -> [f64; 4] {
        let (sin, cos) = self.rotate.to_radians().sin_cos();
        let tan_x = self.skew_x.to_radians().tan();
        let tan_y = self.skew_y.to_radians().tan();
        let s = self.scale;

        // skew = [[1, tan_x], [tan_y, 1]], rotate = [[cos, -sin], [sin, cos]]
        let a = s * (cos - sin * tan_y);
        let b = s * (sin + cos * tan_y);
        let c = s * (cos * tan_x - sin);
        let d = s * (sin * tan_x + cos);
        [a, b, c, d]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotate({}deg) scale({}) skew({}deg, {}deg)",
            self.rotate, self.scale, self.skew_x, self.skew_y
        )
    }
}
