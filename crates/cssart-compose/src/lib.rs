//! CSS Art style composer
//!
//! This crate turns a stream of uniform random values into a
//! [`Composition`](cssart_spec::Composition) of 3 to 7 layered styles. Each
//! layer gets a gradient, a clip region, an optional filter chain, a
//! transform, an optional animation preset and a blend mode.
//!
//! # Example
//!
//! ```
//! use cssart_compose::{generate, DeterministicRng};
//! use cssart_spec::validation::validate_composition;
//!
//! let mut rng = DeterministicRng::new(42);
//! let composition = generate(&mut rng);
//!
//! assert!((3..=7).contains(&composition.len()));
//! assert!(validate_composition(&composition).is_ok());
//! ```
//!
//! # Determinism
//!
//! - Same seed = identical composition
//! - PCG32 RNG is used for seeded generation
//! - Draw order within a layer is fixed (gradient, clip, filters,
//!   transform, animation, blend mode)

pub mod generate;
pub mod rng;

pub use generate::{generate, StyleComposer};
pub use rng::{ConstantSource, DeterministicRng, RandomSource, SequenceSource};
