//! Filter chains.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS color of every drop shadow.
pub const SHADOW_COLOR: &str = "rgba(0,0,0,0.3)";

/// Filter kind, declared in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Blur,
    Brightness,
    Contrast,
    Saturate,
    HueRotate,
    DropShadow,
}

impl FilterKind {
    /// All kinds in chain order.
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Blur,
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturate,
        FilterKind::HueRotate,
        FilterKind::DropShadow,
    ];

    /// CSS function name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Saturate => "saturate",
            FilterKind::HueRotate => "hue-rotate",
            FilterKind::DropShadow => "drop-shadow",
        }
    }
}

/// One filter term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Filter {
    /// Gaussian blur radius in px, `[0, 3]`.
    Blur { radius: f64 },
    /// Linear multiplier, `[0.8, 1.2]`.
    Brightness { amount: f64 },
    /// Contrast factor, `[0.8, 1.4]`.
    Contrast { amount: f64 },
    /// Saturation factor, `[0.5, 2.0]`.
    Saturate { amount: f64 },
    /// Hue rotation in degrees, `[0, 360)`.
    HueRotate { degrees: f64 },
    /// Shadow offsets `[0, 10]` px and blur `[0, 20]` px, colored [`SHADOW_COLOR`].
    DropShadow { offset_x: f64, offset_y: f64, blur: f64 },
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Blur { .. } => FilterKind::Blur,
            Filter::Brightness { .. } => FilterKind::Brightness,
            Filter::Contrast { .. } => FilterKind::Contrast,
            Filter::Saturate { .. } => FilterKind::Saturate,
            Filter::HueRotate { .. } => FilterKind::HueRotate,
            Filter::DropShadow { .. } => FilterKind::DropShadow,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Blur { radius } => write!(f, "blur({}px)", radius),
            Filter::Brightness { amount } => write!(f, "brightness({})", amount),
            Filter::Contrast { amount } => write!(f, "contrast({})", amount),
            Filter::Saturate { amount } => write!(f, "saturate({})", amount),
            Filter::HueRotate { degrees } => write!(f, "hue-rotate({}deg)", degrees),
            Filter::DropShadow {
                offset_x,
                offset_y,
                blur,
            } => write!(
                f,
                "drop-shadow({}px {}px {}px {})",
                offset_x, offset_y, blur, SHADOW_COLOR
            ),
        }
    }
}

/// An ordered, possibly empty, list of filter terms.
///
/// Serializes to the space-separated CSS `filter` value; an empty chain
/// serializes to the empty string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterChain(Vec<Filter>);

impl FilterChain {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self(filters)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.0.iter()
    }

    /// Kinds present, in chain order.
    pub fn kinds(&self) -> Vec<FilterKind> {
        self.0.iter().map(Filter::kind).collect()
    }

    /// True when every kind appears at most once and kinds follow
    /// [`FilterKind::ALL`] order.
    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].kind() < pair[1].kind())
    }

    /// The filter of the given kind, if present.
    pub fn get(&self, kind: FilterKind) -> Option<&Filter> {
        self.0.iter().find(|filter| filter.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a FilterChain {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}
