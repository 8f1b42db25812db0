use cssart_spec::style::{
    AnimationPreset, BlendMode, ClipShape, Filter, FilterKind, Gradient, Point, RadialShape,
};
use cssart_spec::validation::validate_composition;
use cssart_spec::PaletteColor;
use pretty_assertions::assert_eq;

use super::*;
use crate::rng::{ConstantSource, DeterministicRng, SequenceSource};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_all_zero_source_gives_minimal_composition() {
    let composition = generate(&mut ConstantSource::new(0.0));
    assert_eq!(composition.len(), 3);

    for layer in composition.iter() {
        assert_eq!(
            layer.background,
            Gradient::Linear {
                angle: 0,
                colors: [PaletteColor::new(0); 3],
            }
        );
        assert_eq!(
            layer.clip_shape,
            ClipShape::Triangle {
                points: [Point::new(0.0, 0.0); 3],
            }
        );
        assert!(layer.filter_chain.is_empty());
        assert_eq!(layer.transform.rotate, 0.0);
        assert_eq!(layer.transform.scale, 0.5);
        assert_eq!(layer.transform.skew_x, 0.0);
        assert_eq!(layer.transform.skew_y, 0.0);
        assert_eq!(layer.animation, None);
        assert_eq!(layer.blend_mode, BlendMode::Normal);

        let css = layer.css();
        assert_eq!(
            css.background,
            "linear-gradient(0deg, #FF6B6B, #FF6B6B, #FF6B6B)"
        );
        assert_eq!(css.clip_path, "polygon(0% 0%, 0% 0%, 0% 0%)");
        assert_eq!(css.filter, "");
        assert_eq!(css.animation, "none");
    }
}

#[test]
fn test_just_below_one_source_gives_maximal_composition() {
    let composition = generate(&mut ConstantSource::just_below_one());
    assert_eq!(composition.len(), 7);

    for layer in composition.iter() {
        match layer.background {
            Gradient::Conic { from, colors } => {
                assert_eq!(from, 359);
                assert_eq!(colors, [PaletteColor::new(14); 3]);
            }
            other => panic!("expected conic gradient, got {:?}", other),
        }

        match layer.clip_shape {
            ClipShape::Hexagon { points } => {
                for p in points {
                    assert_close(p.x, 100.0);
                    assert_close(p.y, 100.0);
                }
            }
            other => panic!("expected hexagon, got {:?}", other),
        }

        assert_eq!(layer.filter_chain.kinds(), FilterKind::ALL.to_vec());
        for filter in layer.filter_chain.iter() {
            match *filter {
                Filter::Blur { radius } => assert_close(radius, 3.0),
                Filter::Brightness { amount } => assert_close(amount, 1.2),
                Filter::Contrast { amount } => assert_close(amount, 1.4),
                Filter::Saturate { amount } => assert_close(amount, 2.0),
                Filter::HueRotate { degrees } => assert_close(degrees, 360.0),
                Filter::DropShadow {
                    offset_x,
                    offset_y,
                    blur,
                } => {
                    assert_close(offset_x, 10.0);
                    assert_close(offset_y, 10.0);
                    assert_close(blur, 20.0);
                }
            }
        }

        assert_close(layer.transform.rotate, 360.0);
        assert_close(layer.transform.scale, 1.5);
        assert_close(layer.transform.skew_x, 30.0);
        assert_close(layer.transform.skew_y, 30.0);
        assert_eq!(layer.animation, Some(AnimationPreset::Glow));
        assert_eq!(layer.blend_mode, BlendMode::Exclusion);
    }

    let result = validate_composition(&composition);
    assert!(result.is_ok(), "{:?}", result.errors);
}

#[test]
fn test_ranged_draws_at_the_top_stay_half_open() {
    let mut top = ConstantSource::just_below_one();
    assert!(generate_transform(&mut top).scale < 1.5);
    match generate_clip_shape(&mut SequenceSource::new(vec![0.5, 1.0 - f64::EPSILON / 2.0])) {
        ClipShape::Circle { radius, center } => {
            assert!(radius < 50.0);
            assert!(center.x < 100.0 && center.y < 100.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }
}

#[test]
fn test_draw_order_within_layer() {
    // gradient kind, 3 colors, radial shape; clip family, radius, center x,
    // center y; 5 filter coins and the shadow coin; transform x4; animation
    // coin; blend mode.
    let values = vec![
        0.5, // radial
        0.0, 0.2, 0.99, // colors 0, 3, 14
        0.9, // ellipse keyword
        0.5, // circle family
        0.5, // radius 35
        0.25, 0.75, // center
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // no filters, no shadow
        0.0, 0.0, 0.0, 0.0, // transform
        0.0, // no animation
        0.35, // blend index 3 -> overlay
    ];
    let mut source = SequenceSource::new(values);
    let layer = StyleComposer::new().generate_layer(&mut source);

    assert_eq!(
        layer.background,
        Gradient::Radial {
            shape: RadialShape::Ellipse,
            colors: [PaletteColor::new(0), PaletteColor::new(3), PaletteColor::new(14)],
        }
    );
    assert_eq!(
        layer.clip_shape,
        ClipShape::Circle {
            radius: 35.0,
            center: Point::new(25.0, 75.0),
        }
    );
    assert_eq!(layer.blend_mode, BlendMode::Overlay);
    assert_eq!(source.draws(), 21);
}

#[test]
fn test_filters_skip_parameter_draws_when_omitted() {
    // blur omitted, brightness kept at 0.6 -> 0.8 + 0.6 * 0.4
    let mut source = SequenceSource::new(vec![0.1, 0.9, 0.6, 0.2, 0.2, 0.2, 0.1]);
    let chain = generate_filter_chain(&mut source);
    assert_eq!(chain.len(), 1);
    match chain.get(FilterKind::Brightness) {
        Some(Filter::Brightness { amount }) => assert_close(*amount, 1.04),
        other => panic!("expected brightness, got {:?}", other),
    }
    assert_eq!(source.draws(), 7);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let a = generate(&mut DeterministicRng::new(2024));
    let b = generate(&mut DeterministicRng::new(2024));
    assert_eq!(a, b);
}

#[test]
fn test_successive_generations_are_independent() {
    let mut rng = DeterministicRng::new(99);
    let first = generate(&mut rng);
    let second = generate(&mut rng);
    assert_ne!(first, second);
    assert_ne!(first.layers().as_ptr(), second.layers().as_ptr());
}

#[test]
fn test_generated_compositions_validate() {
    for seed in 0..200 {
        let composition = generate(&mut DeterministicRng::new(seed));
        let result = validate_composition(&composition);
        assert!(result.is_ok(), "seed {}: {:?}", seed, result.errors);
    }
}
