//! CSS grammar checks for serialized layer styles.
//!
//! These operate on the strings handed to the renderer, independently of the
//! structured records that produced them.

use std::sync::OnceLock;

use regex::Regex;

use crate::palette::PaletteColor;
use crate::style::{AnimationPreset, BlendMode, FilterKind, ShapeFamily};

/// Non-negative decimal number as produced by `f64` formatting.
const NUM: &str = r"\d+(?:\.\d+)?";

/// Uppercase `#RRGGBB`.
const HEX: &str = r"#[0-9A-F]{6}";

static GRADIENT_REGEX: OnceLock<Regex> = OnceLock::new();
static CLIP_REGEXES: OnceLock<Vec<(ShapeFamily, Regex)>> = OnceLock::new();
static FILTER_CHAIN_REGEX: OnceLock<Regex> = OnceLock::new();
static FILTER_TERM_REGEX: OnceLock<Regex> = OnceLock::new();
static TRANSFORM_REGEX: OnceLock<Regex> = OnceLock::new();

fn gradient_regex() -> &'static Regex {
    GRADIENT_REGEX.get_or_init(|| {
        let colors = format!("({HEX}), ({HEX}), ({HEX})");
        let pattern = format!(
            r"^(?:linear-gradient\((\d{{1,3}})deg, {colors}\)|radial-gradient\((?:circle|ellipse), {colors}\)|conic-gradient\(from (\d{{1,3}})deg, {colors}\))$"
        );
        Regex::new(&pattern).expect("invalid gradient pattern")
    })
}

fn clip_regexes() -> &'static [(ShapeFamily, Regex)] {
    CLIP_REGEXES.get_or_init(|| {
        let point = format!("{NUM}% {NUM}%");
        let polygon = |n: usize| {
            let points = vec![point.clone(); n].join(", ");
            format!(r"^polygon\({points}\)$")
        };
        let circle = format!(r"^circle\({NUM}% at {point}\)$");
        let ellipse = format!(r"^ellipse\({NUM}% {NUM}% at {point}\)$");

        [
            (ShapeFamily::Triangle, polygon(3)),
            (ShapeFamily::Quadrilateral, polygon(4)),
            (ShapeFamily::Circle, circle),
            (ShapeFamily::Ellipse, ellipse),
            (ShapeFamily::Hexagon, polygon(6)),
        ]
        .into_iter()
        .map(|(family, pattern)| {
            (family, Regex::new(&pattern).expect("invalid clip-path pattern"))
        })
        .collect()
    })
}

fn filter_term_pattern() -> String {
    format!(
        r"blur\({NUM}px\)|brightness\({NUM}\)|contrast\({NUM}\)|saturate\({NUM}\)|hue-rotate\({NUM}deg\)|drop-shadow\({NUM}px {NUM}px {NUM}px rgba\(0,0,0,0\.3\)\)"
    )
}

fn filter_chain_regex() -> &'static Regex {
    FILTER_CHAIN_REGEX.get_or_init(|| {
        let term = filter_term_pattern();
        Regex::new(&format!("^(?:(?:{term})(?: (?:{term}))*)?$"))
            .expect("invalid filter chain pattern")
    })
}

fn filter_term_regex() -> &'static Regex {
    FILTER_TERM_REGEX.get_or_init(|| {
        Regex::new(&filter_term_pattern()).expect("invalid filter term pattern")
    })
}

fn transform_regex() -> &'static Regex {
    TRANSFORM_REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^rotate\({NUM}deg\) scale\({NUM}\) skew\({NUM}deg, {NUM}deg\)$"
        ))
        .expect("invalid transform pattern")
    })
}

/// Returns true if `css` is a three-stop gradient over palette colors with a
/// whole-degree angle below 360.
///
/// # Example
/// ```
/// use cssart_spec::validation::grammar::is_valid_gradient;
///
/// assert!(is_valid_gradient("conic-gradient(from 12deg, #FF6B6B, #FF6B6B, #D7BDE2)"));
/// assert!(!is_valid_gradient("linear-gradient(12deg, #FF6B6B, #D7BDE2)"));
/// ```
pub fn is_valid_gradient(css: &str) -> bool {
    let Some(caps) = gradient_regex().captures(css) else {
        return false;
    };

    let angle_ok = caps
        .iter()
        .skip(1)
        .flatten()
        .filter(|m| !m.as_str().starts_with('#'))
        .all(|m| m.as_str().parse::<u16>().map_or(false, |deg| deg < 360));

    let colors_ok = caps
        .iter()
        .skip(1)
        .flatten()
        .filter(|m| m.as_str().starts_with('#'))
        .all(|m| PaletteColor::from_hex(m.as_str()).is_some());

    angle_ok && colors_ok
}

/// The shape family whose grammar `css` matches, if any.
///
/// # Example
/// ```
/// use cssart_spec::validation::grammar::clip_path_family;
/// use cssart_spec::ShapeFamily;
///
/// assert_eq!(clip_path_family("circle(20% at 0% 0%)"), Some(ShapeFamily::Circle));
/// assert_eq!(clip_path_family("inset(10%)"), None);
/// ```
pub fn clip_path_family(css: &str) -> Option<ShapeFamily> {
    clip_regexes()
        .iter()
        .find(|(_, regex)| regex.is_match(css))
        .map(|(family, _)| *family)
}

/// Filter kinds of a serialized chain, in order, or `None` when the string is
/// not a well-formed chain.
pub fn filter_chain_kinds(css: &str) -> Option<Vec<FilterKind>> {
    if !filter_chain_regex().is_match(css) {
        return None;
    }

    let kinds = filter_term_regex()
        .find_iter(css)
        .filter_map(|term| {
            FilterKind::ALL
                .into_iter()
                .find(|kind| term.as_str().starts_with(&format!("{}(", kind.as_str())))
        })
        .collect();
    Some(kinds)
}

/// Returns true if `css` is a well-formed chain with each kind at most once,
/// in fixed kind order.
pub fn is_valid_filter_chain(css: &str) -> bool {
    filter_chain_kinds(css).map_or(false, |kinds| kinds.windows(2).all(|w| w[0] < w[1]))
}

/// Returns true if `css` is exactly `rotate(..) scale(..) skew(.., ..)`.
pub fn is_valid_transform(css: &str) -> bool {
    transform_regex().is_match(css)
}

/// Returns true if `css` is `none` or one of the preset shorthands.
pub fn is_valid_animation(css: &str) -> bool {
    css == "none" || AnimationPreset::ALL.iter().any(|preset| preset.css() == css)
}

/// Returns true if `css` is one of the ten blend mode identifiers.
pub fn is_valid_blend_mode(css: &str) -> bool {
    BlendMode::from_css(css).is_some()
}
