//! Composition validation.
//!
//! [`validate_composition`] checks every structured value against the ranges
//! the composer draws from and then checks the serialized CSS against the
//! grammars in [`grammar`].

pub mod grammar;

use crate::composition::{Composition, MAX_LAYERS, MIN_LAYERS};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::style::{ClipShape, Filter, Gradient, LayerStyle, Point};

/// Validates a composition and returns a validation result.
///
/// # Example
/// ```
/// use cssart_spec::Composition;
/// use cssart_spec::validation::validate_composition;
///
/// let result = validate_composition(&Composition::default());
/// assert!(!result.is_ok());
/// assert_eq!(result.errors[0].code.code(), "E001");
/// ```
pub fn validate_composition(composition: &Composition) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !(MIN_LAYERS..=MAX_LAYERS).contains(&composition.len()) {
        result.add_error(ValidationError::with_path(
            ErrorCode::LayerCountOutOfRange,
            format!(
                "expected {}-{} layers, got {}",
                MIN_LAYERS,
                MAX_LAYERS,
                composition.len()
            ),
            "layers",
        ));
    }

    for (i, layer) in composition.iter().enumerate() {
        validate_layer(layer, &format!("layers[{}]", i), &mut result);
    }

    result
}

/// Validates a single layer, reporting problems under `path`.
pub fn validate_layer(layer: &LayerStyle, path: &str, result: &mut ValidationResult) {
    validate_gradient(&layer.background, &format!("{}.background", path), result);
    validate_clip_shape(&layer.clip_shape, &format!("{}.clip_shape", path), result);
    validate_filters(layer, &format!("{}.filter_chain", path), result);
    validate_transform(layer, &format!("{}.transform", path), result);
    validate_css(layer, path, result);
}

fn validate_gradient(gradient: &Gradient, path: &str, result: &mut ValidationResult) {
    let angle = match gradient {
        Gradient::Linear { angle, .. } => Some(*angle),
        Gradient::Conic { from, .. } => Some(*from),
        Gradient::Radial { .. } => None,
    };
    if let Some(angle) = angle {
        if angle >= 360 {
            result.add_error(ValidationError::with_path(
                ErrorCode::AngleOutOfRange,
                format!("gradient angle must be in [0, 360), got {}", angle),
                path,
            ));
        }
    }

    let [c1, c2, c3] = gradient.colors();
    if c1.hex() == c2.hex() && c2.hex() == c3.hex() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::FlatGradient,
            format!("all three stops are {}", c1),
            path,
        ));
    }
}

fn validate_clip_shape(shape: &ClipShape, path: &str, result: &mut ValidationResult) {
    let check_point = |point: &Point, name: &str, result: &mut ValidationResult| {
        check_range(
            point.x,
            Range::half_open(0.0, 100.0),
            ErrorCode::ClipGeometryOutOfRange,
            &format!("{}.{}.x", path, name),
            result,
        );
        check_range(
            point.y,
            Range::half_open(0.0, 100.0),
            ErrorCode::ClipGeometryOutOfRange,
            &format!("{}.{}.y", path, name),
            result,
        );
    };
    let radius = Range::half_open(20.0, 50.0);

    match shape {
        ClipShape::Circle { radius: r, center } => {
            check_range(
                *r,
                radius,
                ErrorCode::ClipGeometryOutOfRange,
                &format!("{}.radius", path),
                result,
            );
            check_point(center, "center", result);
        }
        ClipShape::Ellipse {
            radius_x,
            radius_y,
            center,
        } => {
            check_range(
                *radius_x,
                radius,
                ErrorCode::ClipGeometryOutOfRange,
                &format!("{}.radius_x", path),
                result,
            );
            check_range(
                *radius_y,
                radius,
                ErrorCode::ClipGeometryOutOfRange,
                &format!("{}.radius_y", path),
                result,
            );
            check_point(center, "center", result);
        }
        _ => {
            let points = shape.polygon_points().unwrap_or_default();
            for (i, point) in points.iter().enumerate() {
                check_point(point, &format!("points[{}]", i), result);
            }
            if shape.polygon_area().map_or(false, |area| area.abs() < 1e-9) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::DegenerateClip,
                    "polygon encloses no area; the layer is invisible",
                    path,
                ));
            }
        }
    }
}

fn validate_filters(layer: &LayerStyle, path: &str, result: &mut ValidationResult) {
    let chain = &layer.filter_chain;
    if !chain.is_canonical() {
        result.add_error(ValidationError::with_path(
            ErrorCode::FilterOrder,
            format!(
                "filters must appear at most once each in blur, brightness, contrast, saturate, hue-rotate, drop-shadow order; got {:?}",
                chain.kinds()
            ),
            path,
        ));
    }

    for (i, filter) in chain.iter().enumerate() {
        let at = format!("{}[{}]", path, i);
        let code = ErrorCode::FilterOutOfRange;
        match filter {
            Filter::Blur { radius } => {
                check_range(*radius, Range::closed(0.0, 3.0), code, &at, result)
            }
            Filter::Brightness { amount } => {
                check_range(*amount, Range::closed(0.8, 1.2), code, &at, result)
            }
            Filter::Contrast { amount } => {
                check_range(*amount, Range::closed(0.8, 1.4), code, &at, result)
            }
            Filter::Saturate { amount } => {
                check_range(*amount, Range::closed(0.5, 2.0), code, &at, result)
            }
            Filter::HueRotate { degrees } => {
                check_range(*degrees, Range::half_open(0.0, 360.0), code, &at, result)
            }
            Filter::DropShadow {
                offset_x,
                offset_y,
                blur,
            } => {
                let offset = Range::closed(0.0, 10.0);
                check_range(*offset_x, offset, code, &format!("{}.offset_x", at), result);
                check_range(*offset_y, offset, code, &format!("{}.offset_y", at), result);
                check_range(
                    *blur,
                    Range::closed(0.0, 20.0),
                    code,
                    &format!("{}.blur", at),
                    result,
                );
            }
        }
    }
}

fn validate_transform(layer: &LayerStyle, path: &str, result: &mut ValidationResult) {
    let t = &layer.transform;
    let code = ErrorCode::TransformOutOfRange;
    check_range(
        t.rotate,
        Range::half_open(0.0, 360.0),
        code,
        &format!("{}.rotate", path),
        result,
    );
    check_range(
        t.scale,
        Range::half_open(0.5, 1.5),
        code,
        &format!("{}.scale", path),
        result,
    );
    let skew = Range::half_open(0.0, 30.0);
    check_range(t.skew_x, skew, code, &format!("{}.skew_x", path), result);
    check_range(t.skew_y, skew, code, &format!("{}.skew_y", path), result);
}

fn validate_css(layer: &LayerStyle, path: &str, result: &mut ValidationResult) {
    let css = layer.css();
    let checks = [
        ("background", grammar::is_valid_gradient(&css.background)),
        (
            "clip_path",
            grammar::clip_path_family(&css.clip_path) == Some(layer.clip_shape.family()),
        ),
        ("filter", grammar::is_valid_filter_chain(&css.filter)),
        ("transform", grammar::is_valid_transform(&css.transform)),
        ("animation", grammar::is_valid_animation(&css.animation)),
        (
            "mix_blend_mode",
            grammar::is_valid_blend_mode(&css.mix_blend_mode),
        ),
    ];

    for (property, ok) in checks {
        if !ok {
            result.add_error(ValidationError::with_path(
                ErrorCode::CssGrammar,
                format!("serialized {} is not well-formed", property),
                format!("{}.css.{}", path, property),
            ));
        }
    }
}

/// A numeric interval with an inclusive lower bound.
#[derive(Debug, Clone, Copy)]
struct Range {
    lo: f64,
    hi: f64,
    hi_inclusive: bool,
}

impl Range {
    fn closed(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            hi_inclusive: true,
        }
    }

    fn half_open(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            hi_inclusive: false,
        }
    }

    fn contains(&self, value: f64) -> bool {
        value >= self.lo && (value < self.hi || (self.hi_inclusive && value == self.hi))
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let close = if self.hi_inclusive { ']' } else { ')' };
        write!(f, "[{}, {}{}", self.lo, self.hi, close)
    }
}

fn check_range(
    value: f64,
    range: Range,
    code: ErrorCode,
    path: &str,
    result: &mut ValidationResult,
) {
    if !value.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteValue,
            format!("value must be finite, got {}", value),
            path,
        ));
    } else if !range.contains(value) {
        result.add_error(ValidationError::with_path(
            code,
            format!("value must be in {}, got {}", range, value),
            path,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;
    use crate::style::{BlendMode, FilterChain, Transform};

    fn valid_layer() -> LayerStyle {
        LayerStyle {
            background: Gradient::Linear {
                angle: 200,
                colors: [PaletteColor::new(0), PaletteColor::new(5), PaletteColor::new(10)],
            },
            clip_shape: ClipShape::Ellipse {
                radius_x: 20.0,
                radius_y: 35.5,
                center: Point::new(40.0, 60.0),
            },
            filter_chain: FilterChain::new(vec![
                Filter::Blur { radius: 3.0 },
                Filter::Contrast { amount: 0.8 },
                Filter::DropShadow {
                    offset_x: 10.0,
                    offset_y: 0.0,
                    blur: 20.0,
                },
            ]),
            transform: Transform::new(359.9, 0.5, 0.0, 29.9),
            animation: None,
            blend_mode: BlendMode::Exclusion,
        }
    }

    fn composition_of(layer: LayerStyle) -> Composition {
        Composition::new(vec![layer.clone(), layer.clone(), layer])
    }

    #[test]
    fn test_valid_composition() {
        let result = validate_composition(&composition_of(valid_layer()));
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_layer_count_bounds() {
        let layer = valid_layer();
        let too_few = Composition::new(vec![layer.clone(), layer.clone()]);
        let too_many = Composition::new(vec![layer; 8]);
        assert_eq!(
            validate_composition(&too_few).errors[0].code,
            ErrorCode::LayerCountOutOfRange
        );
        assert_eq!(
            validate_composition(&too_many).errors[0].code,
            ErrorCode::LayerCountOutOfRange
        );
    }

    #[test]
    fn test_transform_scale_upper_bound_is_exclusive() {
        let mut layer = valid_layer();
        layer.transform.scale = 1.5;
        let result = validate_composition(&composition_of(layer));
        assert!(result
            .errors
            .iter()
            .all(|e| e.code == ErrorCode::TransformOutOfRange));
        assert_eq!(result.errors.len(), 3);
        assert_eq!(
            result.errors[0].path.as_deref(),
            Some("layers[0].transform.scale")
        );
    }

    #[test]
    fn test_out_of_order_filters() {
        let mut layer = valid_layer();
        layer.filter_chain = FilterChain::new(vec![
            Filter::HueRotate { degrees: 10.0 },
            Filter::Blur { radius: 1.0 },
        ]);
        let result = validate_composition(&composition_of(layer));
        let codes: Vec<ErrorCode> = result.errors.iter().map(|e| e.code).collect();
        assert!(codes.contains(&ErrorCode::FilterOrder));
        assert!(codes.contains(&ErrorCode::CssGrammar));
    }

    #[test]
    fn test_non_finite_values() {
        let mut layer = valid_layer();
        layer.clip_shape = ClipShape::Circle {
            radius: f64::NAN,
            center: Point::new(0.0, 0.0),
        };
        let result = validate_composition(&composition_of(layer));
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::NonFiniteValue));
    }

    #[test]
    fn test_warnings_for_flat_gradient_and_collapsed_polygon() {
        let mut layer = valid_layer();
        layer.background = Gradient::Radial {
            shape: crate::style::RadialShape::Circle,
            colors: [PaletteColor::new(9), PaletteColor::new(13), PaletteColor::new(9)],
        };
        layer.clip_shape = ClipShape::Triangle {
            points: [Point::default(); 3],
        };
        let result = validate_composition(&composition_of(layer));
        assert!(result.is_ok());
        let codes: Vec<WarningCode> = result.warnings.iter().map(|w| w.code).collect();
        assert!(codes.contains(&WarningCode::FlatGradient));
        assert!(codes.contains(&WarningCode::DegenerateClip));
    }

    #[test]
    fn test_angle_out_of_range() {
        let mut layer = valid_layer();
        layer.background = Gradient::Conic {
            from: 360,
            colors: [PaletteColor::new(0); 3],
        };
        let result = validate_composition(&composition_of(layer));
        let codes: Vec<ErrorCode> = result.errors.iter().map(|e| e.code).collect();
        assert!(codes.contains(&ErrorCode::AngleOutOfRange));
    }
}
