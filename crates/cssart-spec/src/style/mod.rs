//! Structured layer style records.
//!
//! Every record implements `Display` producing its CSS grammar, so values
//! remain typed until they reach the renderer.

mod animation;
mod blend;
mod clip;
mod filter;
mod gradient;
mod layer;
mod transform;

pub use animation::{AnimationPreset, TimingFunction};
pub use blend::BlendMode;
pub use clip::{ClipShape, Point, ShapeFamily};
pub use filter::{Filter, FilterChain, FilterKind, SHADOW_COLOR};
pub use gradient::{Gradient, GradientKind, RadialShape};
pub use layer::{CssDeclarations, LayerStyle};
pub use transform::Transform;
