//! Gradient painting.
//!
//! All three gradient kinds use three evenly spaced stops at 0%, 50% and
//! 100%. Geometry follows the CSS Images conventions for a box of
//! `width x height` pixels.

use cssart_spec::{Gradient, RadialShape};

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// Color at position `t` along a three-stop gradient.
pub fn color_at(stops: &[Color; 3], t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.5 {
        stops[0].lerp(&stops[1], t * 2.0)
    } else {
        stops[1].lerp(&stops[2], (t - 0.5) * 2.0)
    }
}

/// Gradient position of a pixel-space point for the given gradient.
pub fn position(gradient: &Gradient, width: f64, height: f64, x: f64, y: f64) -> f64 {
    let dx = x - width / 2.0;
    let dy = y - height / 2.0;

    match gradient {
        Gradient::Linear { angle, .. } => {
            // 0deg points up; angles increase clockwise.
            let (sin, cos) = (*angle as f64).to_radians().sin_cos();
            let length = (width * sin).abs() + (height * cos).abs();
            if length <= 0.0 {
                return 0.0;
            }
            (dx * sin - dy * cos) / length + 0.5
        }
        Gradient::Radial { shape, .. } => {
            // farthest-corner sizing for a centered gradient
            match shape {
                RadialShape::Circle => {
                    let radius = (width / 2.0).hypot(height / 2.0);
                    if radius <= 0.0 {
                        return 0.0;
                    }
                    dx.hypot(dy) / radius
                }
                RadialShape::Ellipse => {
                    let rx = width / 2.0 * std::f64::consts::SQRT_2;
                    let ry = height / 2.0 * std::f64::consts::SQRT_2;
                    if rx <= 0.0 || ry <= 0.0 {
                        return 0.0;
                    }
                    (dx / rx).hypot(dy / ry)
                }
            }
        }
        Gradient::Conic { from, .. } => {
            // clockwise from the top, starting at `from`
            let theta = dx.atan2(-dy).to_degrees();
            (theta - *from as f64).rem_euclid(360.0) / 360.0
        }
    }
}

/// Paint `gradient` across a `width x height` box.
pub fn paint(gradient: &Gradient, width: u32, height: u32) -> PixelBuffer {
    let colors = gradient.colors();
    let stops = [
        Color::from_palette(colors[0]),
        Color::from_palette(colors[1]),
        Color::from_palette(colors[2]),
    ];
    let (w, h) = (width as f64, height as f64);

    PixelBuffer::from_fn(width, height, |x, y| {
        color_at(&stops, position(gradient, w, h, x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssart_spec::PaletteColor;

    fn colors() -> [PaletteColor; 3] {
        [PaletteColor::new(0), PaletteColor::new(1), PaletteColor::new(2)]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_zero_degrees_runs_bottom_to_top() {
        let g = Gradient::Linear {
            angle: 0,
            colors: colors(),
        };
        assert!(close(position(&g, 100.0, 100.0, 50.0, 100.0), 0.0));
        assert!(close(position(&g, 100.0, 100.0, 50.0, 0.0), 1.0));
        assert!(close(position(&g, 100.0, 100.0, 50.0, 50.0), 0.5));
    }

    #[test]
    fn test_linear_ninety_degrees_runs_left_to_right() {
        let g = Gradient::Linear {
            angle: 90,
            colors: colors(),
        };
        assert!(close(position(&g, 200.0, 100.0, 0.0, 10.0), 0.0));
        assert!(close(position(&g, 200.0, 100.0, 200.0, 90.0), 1.0));
    }

    #[test]
    fn test_linear_diagonal_hits_corners() {
        let g = Gradient::Linear {
            angle: 45,
            colors: colors(),
        };
        assert!(close(position(&g, 100.0, 100.0, 0.0, 100.0), 0.0));
        assert!(close(position(&g, 100.0, 100.0, 100.0, 0.0), 1.0));
    }

    #[test]
    fn test_radial_reaches_farthest_corner() {
        for shape in RadialShape::ALL {
            let g = Gradient::Radial {
                shape,
                colors: colors(),
            };
            assert!(close(position(&g, 200.0, 100.0, 100.0, 50.0), 0.0));
            assert!(close(position(&g, 200.0, 100.0, 0.0, 0.0), 1.0), "{:?}", shape);
        }
    }

    #[test]
    fn test_conic_starts_at_from_angle() {
        let g = Gradient::Conic {
            from: 90,
            colors: colors(),
        };
        // directly right of center is 90deg clockwise from the top
        assert!(close(position(&g, 100.0, 100.0, 90.0, 50.0), 0.0));
        // directly below is a quarter turn further
        assert!(close(position(&g, 100.0, 100.0, 50.0, 90.0), 0.25));
    }

    #[test]
    fn test_three_stops() {
        let stops = [Color::black(), Color::rgb(1.0, 0.0, 0.0), Color::white()];
        assert_eq!(color_at(&stops, 0.0), Color::black());
        assert_eq!(color_at(&stops, 0.5), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(color_at(&stops, 1.0), Color::white());
        assert_eq!(color_at(&stops, 2.0), Color::white());
    }

    #[test]
    fn test_paint_is_opaque() {
        let g = Gradient::Conic {
            from: 0,
            colors: colors(),
        };
        let buffer = paint(&g, 8, 8);
        assert!(buffer.data.iter().all(|c| c.a == 1.0));
    }
}
