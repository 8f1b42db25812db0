//! Per-field style generators.
//!
//! Each generator is a pure function of the random source. Draw order within
//! a generator is fixed, which keeps generation reproducible for a given
//! stream of values.

use cssart_spec::style::{
    AnimationPreset, BlendMode, ClipShape, Filter, FilterChain, Gradient, GradientKind, Point,
    RadialShape, ShapeFamily, Transform,
};
use cssart_spec::PaletteColor;
use cssart_spec::PALETTE;

use crate::rng::RandomSource;

/// Optional filters are kept when their draw exceeds this.
const FILTER_THRESHOLD: f64 = 0.5;
/// Drop shadow is kept when its draw exceeds this.
const SHADOW_THRESHOLD: f64 = 0.7;
/// An animation is attached when its draw exceeds this.
const ANIMATION_THRESHOLD: f64 = 0.6;

const BLUR_MAX_PX: f64 = 3.0;
const BRIGHTNESS: (f64, f64) = (0.8, 1.2);
const CONTRAST: (f64, f64) = (0.8, 1.4);
const SATURATE: (f64, f64) = (0.5, 2.0);
const SHADOW_OFFSET_MAX_PX: f64 = 10.0;
const SHADOW_BLUR_MAX_PX: f64 = 20.0;

const CLIP_RADIUS: (f64, f64) = (20.0, 50.0);
const SCALE: (f64, f64) = (0.5, 1.5);
const SKEW_MAX_DEG: f64 = 30.0;

fn palette_color<R: RandomSource>(rng: &mut R) -> PaletteColor {
    PaletteColor::new(rng.index(PALETTE.len()))
}

/// Random three-stop gradient.
pub fn generate_gradient<R: RandomSource>(rng: &mut R) -> Gradient {
    let kind = rng.pick(&GradientKind::ALL);
    let colors = [palette_color(rng), palette_color(rng), palette_color(rng)];

    match kind {
        GradientKind::Linear => Gradient::Linear {
            angle: rng.whole_degrees(),
            colors,
        },
        GradientKind::Radial => Gradient::Radial {
            shape: rng.pick(&RadialShape::ALL),
            colors,
        },
        GradientKind::Conic => Gradient::Conic {
            from: rng.whole_degrees(),
            colors,
        },
    }
}

fn point<R: RandomSource>(rng: &mut R) -> Point {
    let x = rng.range(0.0, 100.0);
    let y = rng.range(0.0, 100.0);
    Point::new(x, y)
}

fn points<R: RandomSource, const N: usize>(rng: &mut R) -> [Point; N] {
    let mut points = [Point::default(); N];
    for slot in points.iter_mut() {
        *slot = point(rng);
    }
    points
}

/// Random clip region from one of the five shape families.
pub fn generate_clip_shape<R: RandomSource>(rng: &mut R) -> ClipShape {
    match rng.pick(&ShapeFamily::ALL) {
        ShapeFamily::Triangle => ClipShape::Triangle { points: points(rng) },
        ShapeFamily::Quadrilateral => ClipShape::Quadrilateral { points: points(rng) },
        ShapeFamily::Circle => {
            let radius = rng.range(CLIP_RADIUS.0, CLIP_RADIUS.1);
            ClipShape::Circle {
                radius,
                center: point(rng),
            }
        }
        ShapeFamily::Ellipse => {
            let radius_x = rng.range(CLIP_RADIUS.0, CLIP_RADIUS.1);
            let radius_y = rng.range(CLIP_RADIUS.0, CLIP_RADIUS.1);
            ClipShape::Ellipse {
                radius_x,
                radius_y,
                center: point(rng),
            }
        }
        ShapeFamily::Hexagon => ClipShape::Hexagon { points: points(rng) },
    }
}

/// Random filter chain. Each kind is considered once, in chain order.
pub fn generate_filter_chain<R: RandomSource>(rng: &mut R) -> FilterChain {
    let mut filters = Vec::new();

    if rng.chance_above(FILTER_THRESHOLD) {
        filters.push(Filter::Blur {
            radius: rng.range(0.0, BLUR_MAX_PX),
        });
    }
    if rng.chance_above(FILTER_THRESHOLD) {
        filters.push(Filter::Brightness {
            amount: rng.range(BRIGHTNESS.0, BRIGHTNESS.1),
        });
    }
    if rng.chance_above(FILTER_THRESHOLD) {
        filters.push(Filter::Contrast {
            amount: rng.range(CONTRAST.0, CONTRAST.1),
        });
    }
    if rng.chance_above(FILTER_THRESHOLD) {
        filters.push(Filter::Saturate {
            amount: rng.range(SATURATE.0, SATURATE.1),
        });
    }
    if rng.chance_above(FILTER_THRESHOLD) {
        filters.push(Filter::HueRotate {
            degrees: rng.range(0.0, 360.0),
        });
    }
    if rng.chance_above(SHADOW_THRESHOLD) {
        let offset_x = rng.range(0.0, SHADOW_OFFSET_MAX_PX);
        let offset_y = rng.range(0.0, SHADOW_OFFSET_MAX_PX);
        let blur = rng.range(0.0, SHADOW_BLUR_MAX_PX);
        filters.push(Filter::DropShadow {
            offset_x,
            offset_y,
            blur,
        });
    }

    FilterChain::new(filters)
}

/// Random rotate, scale and skew.
pub fn generate_transform<R: RandomSource>(rng: &mut R) -> Transform {
    let rotate = rng.range(0.0, 360.0);
    let scale = rng.range(SCALE.0, SCALE.1);
    let skew_x = rng.range(0.0, SKEW_MAX_DEG);
    let skew_y = rng.range(0.0, SKEW_MAX_DEG);
    Transform::new(rotate, scale, skew_x, skew_y)
}

/// A preset with probability 0.4, otherwise no animation.
pub fn generate_animation<R: RandomSource>(rng: &mut R) -> Option<AnimationPreset> {
    if rng.chance_above(ANIMATION_THRESHOLD) {
        Some(rng.pick(&AnimationPreset::ALL))
    } else {
        None
    }
}

pub fn generate_blend_mode<R: RandomSource>(rng: &mut R) -> BlendMode {
    rng.pick(&BlendMode::ALL)
}
