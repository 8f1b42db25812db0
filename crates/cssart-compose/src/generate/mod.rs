//! Main entry point for style generation.
//!
//! [`StyleComposer::generate`] draws a layer count and then assembles each
//! layer from the independent generators in [`layers`].

mod layers;

#[cfg(test)]
mod tests;

use cssart_spec::{Composition, LayerStyle, MAX_LAYERS, MIN_LAYERS};

use crate::rng::RandomSource;

pub use layers::{
    generate_animation, generate_blend_mode, generate_clip_shape, generate_filter_chain,
    generate_gradient, generate_transform,
};

/// Produces compositions from a random source.
///
/// The composer holds no state between calls: every composition it returns
/// is freshly built and shares nothing with earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleComposer;

impl StyleComposer {
    pub fn new() -> Self {
        Self
    }

    /// Generate a composition of 3 to 7 layers.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Composition {
        let count = MIN_LAYERS + rng.index(MAX_LAYERS - MIN_LAYERS + 1);
        let layers: Vec<LayerStyle> = (0..count).map(|_| self.generate_layer(rng)).collect();

        log::debug!(
            "composed {} layers ({} animated, {} filtered)",
            layers.len(),
            layers.iter().filter(|l| l.animation.is_some()).count(),
            layers.iter().filter(|l| !l.filter_chain.is_empty()).count()
        );

        Composition::new(layers)
    }

    /// Generate one layer. Fields are drawn in declaration order.
    pub fn generate_layer<R: RandomSource>(&self, rng: &mut R) -> LayerStyle {
        let background = generate_gradient(rng);
        let clip_shape = generate_clip_shape(rng);
        let filter_chain = generate_filter_chain(rng);
        let transform = generate_transform(rng);
        let animation = generate_animation(rng);
        let blend_mode = generate_blend_mode(rng);

        LayerStyle {
            background,
            clip_shape,
            filter_chain,
            transform,
            animation,
            blend_mode,
        }
    }
}

/// Generate a composition with a default [`StyleComposer`].
pub fn generate<R: RandomSource>(rng: &mut R) -> Composition {
    StyleComposer::new().generate(rng)
}
