//! Layer styles and their CSS declarations.

use serde::{Deserialize, Serialize};

use super::{AnimationPreset, BlendMode, ClipShape, FilterChain, Gradient, Transform};

/// The complete style of one layer.
///
/// Immutable once produced: a new generation produces new values rather
/// than editing existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub background: Gradient,
    pub clip_shape: ClipShape,
    #[serde(default)]
    pub filter_chain: FilterChain,
    pub transform: Transform,
    /// `None` means no animation.
    #[serde(default)]
    pub animation: Option<AnimationPreset>,
    pub blend_mode: BlendMode,
}

impl LayerStyle {
    /// Serialize every field to its CSS property value.
    pub fn css(&self) -> CssDeclarations {
        CssDeclarations {
            background: self.background.to_string(),
            clip_path: self.clip_shape.to_string(),
            filter: self.filter_chain.to_string(),
            transform: self.transform.to_string(),
            animation: self
                .animation
                .map(|preset| preset.css())
                .unwrap_or_else(|| "none".to_string()),
            mix_blend_mode: self.blend_mode.as_str().to_string(),
        }
    }
}

/// CSS property values of one layer, ready for the render boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssDeclarations {
    pub background: String,
    pub clip_path: String,
    /// Empty when the chain is empty.
    pub filter: String,
    pub transform: String,
    /// `none` when the layer is not animated.
    pub animation: String,
    pub mix_blend_mode: String,
}

impl CssDeclarations {
    /// `(property, value)` pairs in declaration order. The filter is omitted
    /// when empty.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        let mut props = vec![
            ("background", self.background.as_str()),
            ("clip-path", self.clip_path.as_str()),
        ];
        if !self.filter.is_empty() {
            props.push(("filter", self.filter.as_str()));
        }
        props.push(("transform", self.transform.as_str()));
        props.push(("animation", self.animation.as_str()));
        props.push(("mix-blend-mode", self.mix_blend_mode.as_str()));
        props
    }

    /// An inline `style` attribute value, optionally with a render-time opacity.
    pub fn inline_style(&self, opacity: Option<f64>) -> String {
        let mut style: Vec<String> = self
            .properties()
            .into_iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect();
        if let Some(opacity) = opacity {
            style.push(format!("opacity: {};", opacity));
        }
        style.join(" ")
    }
}
