//! CSS Art Style Library
//!
//! This crate provides the data model for generated CSS art compositions:
//! structured layer styles, their serialization to CSS property strings,
//! and validation of both the structured values and the emitted strings.
//!
//! # Overview
//!
//! A [`Composition`] is an ordered stack of 3 to 7 [`LayerStyle`] values,
//! bottom layer first. Each layer carries:
//!
//! - **Background**: a [`Gradient`] (linear, radial or conic) over three palette colors
//! - **Clip shape**: a [`ClipShape`] (triangle, quadrilateral, circle, ellipse, hexagon)
//! - **Filter chain**: zero or more [`Filter`] terms in fixed kind order
//! - **Transform**: rotate, scale and skew, always all three
//! - **Animation**: an optional [`AnimationPreset`]
//! - **Blend mode**: one of ten [`BlendMode`] identifiers
//!
//! Values stay structured until the render boundary, where
//! [`LayerStyle::css`] turns them into CSS declaration strings.
//!
//! # Example
//!
//! ```
//! use cssart_spec::{
//!     AnimationPreset, BlendMode, ClipShape, Composition, FilterChain, Gradient, LayerStyle,
//!     PaletteColor, Point, Transform,
//! };
//! use cssart_spec::validation::validate_composition;
//!
//! let layer = LayerStyle {
//!     background: Gradient::Linear {
//!         angle: 45,
//!         colors: [PaletteColor::new(0), PaletteColor::new(1), PaletteColor::new(2)],
//!     },
//!     clip_shape: ClipShape::Circle {
//!         radius: 30.0,
//!         center: Point::new(50.0, 50.0),
//!     },
//!     filter_chain: FilterChain::default(),
//!     transform: Transform::new(10.0, 1.0, 0.0, 0.0),
//!     animation: Some(AnimationPreset::Spin),
//!     blend_mode: BlendMode::Screen,
//! };
//!
//! let css = layer.css();
//! assert_eq!(css.background, "linear-gradient(45deg, #FF6B6B, #4ECDC4, #45B7D1)");
//! assert_eq!(css.clip_path, "circle(30% at 50% 50%)");
//!
//! let composition = Composition::new(vec![layer.clone(), layer.clone(), layer]);
//! assert!(validate_composition(&composition).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes, validation results, and the backend error trait
//! - [`palette`]: The fixed 15-color palette
//! - [`style`]: Structured layer style records and their CSS grammar
//! - [`composition`]: Compositions and mounted render targets
//! - [`validation`]: Range validation and CSS grammar checks

pub mod composition;
pub mod error;
pub mod palette;
pub mod style;
pub mod validation;

// Re-export commonly used types at the crate root
pub use composition::{Composition, RenderTarget, MAX_LAYERS, MIN_LAYERS};
pub use error::{
    BackendError, ErrorCode, StyleError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use palette::{PaletteColor, PALETTE};
pub use style::{
    AnimationPreset, BlendMode, ClipShape, CssDeclarations, Filter, FilterChain, FilterKind,
    Gradient, GradientKind, LayerStyle, Point, RadialShape, ShapeFamily, TimingFunction,
    Transform,
};
