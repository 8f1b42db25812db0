//! Property-based tests for style generation.
//!
//! Every composition drawn from a seeded stream must stay inside the style
//! vocabulary: layer count, palette colors, canonical filter order, and the
//! CSS grammar of each declaration.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cssart-compose --test proptest_generation
//! ```

use std::collections::HashSet;

use proptest::prelude::*;
use regex::Regex;

use cssart_compose::{generate, ConstantSource, DeterministicRng};
use cssart_spec::style::{AnimationPreset, BlendMode};
use cssart_spec::validation::grammar::{
    clip_path_family, is_valid_animation, is_valid_filter_chain, is_valid_gradient,
    is_valid_transform,
};
use cssart_spec::validation::validate_composition;
use cssart_spec::{MAX_LAYERS, MIN_LAYERS, PALETTE};

fn hex_color() -> Regex {
    Regex::new(r"#[0-9A-F]{6}").unwrap()
}

proptest! {
    /// Layer count always lands in [3, 7].
    #[test]
    fn layer_count_in_range(seed in any::<u32>()) {
        let composition = generate(&mut DeterministicRng::new(seed));
        prop_assert!(composition.len() >= MIN_LAYERS);
        prop_assert!(composition.len() <= MAX_LAYERS);
    }

    /// Every generated composition passes structural validation.
    #[test]
    fn generated_compositions_validate(seed in any::<u32>()) {
        let composition = generate(&mut DeterministicRng::new(seed));
        let result = validate_composition(&composition);
        prop_assert!(result.is_ok(), "seed {}: {:?}", seed, result.errors);
    }

    /// Backgrounds use exactly three palette colors.
    #[test]
    fn gradients_use_three_palette_colors(seed in any::<u32>()) {
        let re = hex_color();
        let composition = generate(&mut DeterministicRng::new(seed));
        for layer in composition.iter() {
            let css = layer.css();
            prop_assert!(is_valid_gradient(&css.background), "{}", css.background);
            let colors: Vec<&str> = re.find_iter(&css.background).map(|m| m.as_str()).collect();
            prop_assert_eq!(colors.len(), 3);
            for color in colors {
                prop_assert!(PALETTE.contains(&color), "{} not in palette", color);
            }
        }
    }

    /// Clip paths parse to the family the layer reports.
    #[test]
    fn clip_paths_match_family(seed in any::<u32>()) {
        let composition = generate(&mut DeterministicRng::new(seed));
        for layer in composition.iter() {
            let css = layer.css();
            prop_assert_eq!(clip_path_family(&css.clip_path), Some(layer.clip_shape.family()));
        }
    }

    /// Filters appear at most once each and in canonical order.
    #[test]
    fn filter_chains_are_ordered(seed in any::<u32>()) {
        let composition = generate(&mut DeterministicRng::new(seed));
        for layer in composition.iter() {
            prop_assert!(layer.filter_chain.is_canonical());
            let css = layer.css();
            prop_assert!(is_valid_filter_chain(&css.filter), "{}", css.filter);
        }
    }

    /// Transforms keep the rotate/scale/skew shape.
    #[test]
    fn transforms_follow_grammar(seed in any::<u32>()) {
        let composition = generate(&mut DeterministicRng::new(seed));
        for layer in composition.iter() {
            let css = layer.css();
            prop_assert!(is_valid_transform(&css.transform), "{}", css.transform);
        }
    }

    /// Animation is a preset shorthand or "none"; blend mode is a known keyword.
    #[test]
    fn animation_and_blend_are_known(seed in any::<u32>()) {
        let presets: HashSet<String> = AnimationPreset::ALL.iter().map(|p| p.css()).collect();
        let composition = generate(&mut DeterministicRng::new(seed));
        for layer in composition.iter() {
            let css = layer.css();
            prop_assert!(is_valid_animation(&css.animation));
            prop_assert!(css.animation == "none" || presets.contains(&css.animation));
            prop_assert!(BlendMode::from_css(&css.mix_blend_mode).is_some());
        }
    }

    /// Any constant draw in [0, 1) still yields a valid composition.
    #[test]
    fn constant_sources_stay_in_range(u in 0.0f64..1.0) {
        let composition = generate(&mut ConstantSource::new(u));
        let result = validate_composition(&composition);
        prop_assert!(result.is_ok(), "u={}: {:?}", u, result.errors);
    }
}

#[test]
fn all_presets_eventually_appear() {
    let mut rng = DeterministicRng::new(1);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        for layer in generate(&mut rng).iter() {
            if let Some(preset) = layer.animation {
                seen.insert(preset);
            }
        }
    }
    assert_eq!(seen.len(), AnimationPreset::ALL.len());
}
