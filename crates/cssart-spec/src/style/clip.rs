//! Clip-path shapes.
//!
//! All coordinates and radii are percentages of the layer box.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in percent coordinates of the layer box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x, self.y)
    }
}

/// Shape family of a clip region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    Triangle,
    Quadrilateral,
    Circle,
    Ellipse,
    Hexagon,
}

impl ShapeFamily {
    /// All families in draw order.
    pub const ALL: [ShapeFamily; 5] = [
        ShapeFamily::Triangle,
        ShapeFamily::Quadrilateral,
        ShapeFamily::Circle,
        ShapeFamily::Ellipse,
        ShapeFamily::Hexagon,
    ];

    /// Number of polygon vertices, or `None` for round shapes.
    pub fn vertex_count(&self) -> Option<usize> {
        match self {
            ShapeFamily::Triangle => Some(3),
            ShapeFamily::Quadrilateral => Some(4),
            ShapeFamily::Hexagon => Some(6),
            ShapeFamily::Circle | ShapeFamily::Ellipse => None,
        }
    }
}

/// A clip region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ClipShape {
    Triangle { points: [Point; 3] },
    Quadrilateral { points: [Point; 4] },
    /// `radius` is relative to the box diagonal divided by sqrt(2).
    Circle { radius: f64, center: Point },
    /// `radius_x` is relative to the box width, `radius_y` to its height.
    Ellipse { radius_x: f64, radius_y: f64, center: Point },
    /// Arbitrary six-point polygon.
    Hexagon { points: [Point; 6] },
}

impl ClipShape {
    pub fn family(&self) -> ShapeFamily {
        match self {
            ClipShape::Triangle { .. } => ShapeFamily::Triangle,
            ClipShape::Quadrilateral { .. } => ShapeFamily::Quadrilateral,
            ClipShape::Circle { .. } => ShapeFamily::Circle,
            ClipShape::Ellipse { .. } => ShapeFamily::Ellipse,
            ClipShape::Hexagon { .. } => ShapeFamily::Hexagon,
        }
    }

    /// Polygon vertices, or `None` for circle and ellipse.
    pub fn polygon_points(&self) -> Option<&[Point]> {
        match self {
            ClipShape::Triangle { points } => Some(points),
            ClipShape::Quadrilateral { points } => Some(points),
            ClipShape::Hexagon { points } => Some(points),
            ClipShape::Circle { .. } | ClipShape::Ellipse { .. } => None,
        }
    }

    /// Signed area of a polygon clip (shoelace formula), in percent².
    ///
    /// Returns `None` for round shapes.
    pub fn polygon_area(&self) -> Option<f64> {
        let points = self.polygon_points()?;
        let mut twice_area = 0.0;
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            twice_area += a.x * b.y - b.x * a.y;
        }
        Some(twice_area / 2.0)
    }
}

impl fmt::Display for ClipShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipShape::Circle { radius, center } => write!(f, "circle({}% at {})", radius, center),
            ClipShape::Ellipse {
                radius_x,
                radius_y,
                center,
            } => write!(f, "ellipse({}% {}% at {})", radius_x, radius_y, center),
            _ => {
                f.write_str("polygon(")?;
                for (i, point) in self.polygon_points().unwrap_or_default().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", point)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_css() {
        let shape = ClipShape::Triangle {
            points: [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.5, 100.0)],
        };
        assert_eq!(shape.to_string(), "polygon(0% 0%, 100% 0%, 50.5% 100%)");
        assert_eq!(shape.family().vertex_count(), Some(3));
    }

    #[test]
    fn test_circle_css() {
        let shape = ClipShape::Circle {
            radius: 25.0,
            center: Point::new(10.0, 90.0),
        };
        assert_eq!(shape.to_string(), "circle(25% at 10% 90%)");
        assert!(shape.polygon_points().is_none());
    }

    #[test]
    fn test_ellipse_css() {
        let shape = ClipShape::Ellipse {
            radius_x: 20.0,
            radius_y: 49.5,
            center: Point::new(50.0, 50.0),
        };
        assert_eq!(shape.to_string(), "ellipse(20% 49.5% at 50% 50%)");
    }

    #[test]
    fn test_hexagon_has_six_points() {
        let shape = ClipShape::Hexagon {
            points: [Point::default(); 6],
        };
        assert_eq!(shape.polygon_points().map(<[Point]>::len), Some(6));
        assert_eq!(shape.to_string().matches('%').count(), 12);
    }

    #[test]
    fn test_polygon_area() {
        let square = ClipShape::Quadrilateral {
            points: [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
        };
        assert_eq!(square.polygon_area(), Some(100.0));

        let collapsed = ClipShape::Triangle {
            points: [Point::default(); 3],
        };
        assert_eq!(collapsed.polygon_area(), Some(0.0));
    }
}
