//! Compositions and mounted render targets.

use serde::{Deserialize, Serialize};

use crate::style::LayerStyle;

/// Fewest layers a generated composition has.
pub const MIN_LAYERS: usize = 3;

/// Most layers a generated composition has.
pub const MAX_LAYERS: usize = 7;

/// An ordered stack of layers, bottom first.
///
/// A composition has no identity beyond its contents. It is replaced
/// wholesale by each generation and never edited in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    layers: Vec<LayerStyle>,
}

impl Composition {
    pub fn new(layers: Vec<LayerStyle>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[LayerStyle] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerStyle> {
        self.layers.iter()
    }

    /// Parse a composition from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a Composition {
    type Item = &'a LayerStyle;
    type IntoIter = std::slice::Iter<'a, LayerStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A composition mounted for display.
///
/// Mounting fixes one opacity per layer. Opacity is a presentation detail
/// chosen at render time, so it lives here rather than in [`LayerStyle`].
/// The render target stays stable for as long as it is mounted, which is
/// what lets an exporter capture exactly what is on screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderTarget {
    composition: Composition,
    opacities: Vec<f64>,
}

impl RenderTarget {
    /// Mount a composition, asking `opacity` for each layer's opacity by index.
    pub fn mount(composition: Composition, mut opacity: impl FnMut(usize) -> f64) -> Self {
        let opacities = (0..composition.len()).map(&mut opacity).collect();
        Self {
            composition,
            opacities,
        }
    }

    /// Mount with every layer fully opaque.
    pub fn opaque(composition: Composition) -> Self {
        Self::mount(composition, |_| 1.0)
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn opacities(&self) -> &[f64] {
        &self.opacities
    }

    /// Layers bottom first, each with its mounted opacity.
    pub fn layers(&self) -> impl Iterator<Item = (&LayerStyle, f64)> + '_ {
        self.composition
            .iter()
            .zip(self.opacities.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }
}
