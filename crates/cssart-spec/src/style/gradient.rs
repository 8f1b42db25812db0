//! Gradient backgrounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::palette::PaletteColor;

/// Gradient family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// All kinds in draw order.
    pub const ALL: [GradientKind; 3] = [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic];

    /// CSS function prefix (`linear`, `radial`, `conic`).
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

/// Ending shape keyword of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialShape {
    Circle,
    Ellipse,
}

impl RadialShape {
    /// All shapes in draw order.
    pub const ALL: [RadialShape; 2] = [RadialShape::Circle, RadialShape::Ellipse];

    pub fn as_str(&self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

/// A three-stop gradient background.
///
/// Angles are whole degrees in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gradient {
    /// `linear-gradient(<angle>deg, c1, c2, c3)`
    Linear { angle: u16, colors: [PaletteColor; 3] },
    /// `radial-gradient(<shape>, c1, c2, c3)`
    Radial { shape: RadialShape, colors: [PaletteColor; 3] },
    /// `conic-gradient(from <angle>deg, c1, c2, c3)`
    Conic { from: u16, colors: [PaletteColor; 3] },
}

impl Gradient {
    pub fn kind(&self) -> GradientKind {
        match self {
            Gradient::Linear { .. } => GradientKind::Linear,
            Gradient::Radial { .. } => GradientKind::Radial,
            Gradient::Conic { .. } => GradientKind::Conic,
        }
    }

    /// The three color stops in order.
    pub fn colors(&self) -> &[PaletteColor; 3] {
        match self {
            Gradient::Linear { colors, .. }
            | Gradient::Radial { colors, .. }
            | Gradient::Conic { colors, .. } => colors,
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3] = self.colors();
        match self {
            Gradient::Linear { angle, .. } => {
                write!(f, "linear-gradient({}deg, {}, {}, {})", angle, c1, c2, c3)
            }
            Gradient::Radial { shape, .. } => {
                write!(f, "radial-gradient({}, {}, {}, {})", shape.as_str(), c1, c2, c3)
            }
            Gradient::Conic { from, .. } => {
                write!(f, "conic-gradient(from {}deg, {}, {}, {})", from, c1, c2, c3)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> [PaletteColor; 3] {
        [PaletteColor::new(0), PaletteColor::new(4), PaletteColor::new(14)]
    }

    #[test]
    fn test_linear_css() {
        let g = Gradient::Linear { angle: 135, colors: colors() };
        assert_eq!(g.to_string(), "linear-gradient(135deg, #FF6B6B, #FFEAA7, #D7BDE2)");
        assert_eq!(g.kind(), GradientKind::Linear);
    }

    #[test]
    fn test_radial_css() {
        let g = Gradient::Radial { shape: RadialShape::Ellipse, colors: colors() };
        assert_eq!(g.to_string(), "radial-gradient(ellipse, #FF6B6B, #FFEAA7, #D7BDE2)");
    }

    #[test]
    fn test_conic_css() {
        let g = Gradient::Conic { from: 0, colors: colors() };
        assert_eq!(g.to_string(), "conic-gradient(from 0deg, #FF6B6B, #FFEAA7, #D7BDE2)");
    }

    #[test]
    fn test_serde_tagged() {
        let g = Gradient::Radial { shape: RadialShape::Circle, colors: colors() };
        let json = serde_json::to_value(g).unwrap();
        assert_eq!(json["kind"], "radial");
        assert_eq!(json["shape"], "circle");
        assert_eq!(json["colors"][1], "#FFEAA7");
    }
}
