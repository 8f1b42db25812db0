//! CSS Art Raster Backend
//!
//! This crate captures a mounted composition as pixels and encodes it as a
//! PNG. It is the export collaborator behind the studio: the studio hands it
//! a [`RenderTarget`](cssart_spec::RenderTarget) and a set of
//! [`RasterOptions`], and gets back an image or a coded error.
//!
//! # Painting model
//!
//! Every layer covers the full viewport box. For each layer, bottom first:
//!
//! 1. paint the gradient
//! 2. run the filter chain
//! 3. apply the clip region
//! 4. map through the transform about the box center and blend onto the
//!    canvas with the layer opacity
//!
//! Animated layers are sampled at [`RasterOptions::time`]; the animated
//! property replaces the static one for that frame.
//!
//! # Example
//!
//! ```
//! use cssart_backend_raster::{CpuRasterizer, PngConfig, RasterOptions, Rasterizer};
//! use cssart_compose::{generate, DeterministicRng};
//! use cssart_spec::RenderTarget;
//!
//! let composition = generate(&mut DeterministicRng::new(7));
//! let target = RenderTarget::opaque(composition);
//! let options = RasterOptions {
//!     width: 32,
//!     height: 32,
//!     scale: 1.0,
//!     ..RasterOptions::default()
//! };
//!
//! let image = CpuRasterizer::new().rasterize(&target, &options).unwrap();
//! let png = image.encode_png(&PngConfig::default()).unwrap();
//! assert_eq!((png.width, png.height), (32, 32));
//! ```
//!
//! # Determinism
//!
//! Same target + same options = byte-identical PNG. The PNG encoder uses
//! fixed settings and the BLAKE3 hash of the output is reported alongside
//! the bytes.

pub mod animation;
pub mod buffer;
pub mod clip;
pub mod color;
pub mod filter;
pub mod gradient;
pub mod png;
pub mod raster;
pub mod transform;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use png::{PngConfig, PngError};
pub use raster::{
    CpuRasterizer, EncodedPng, RasterImage, RasterOptions, RasterizationError, Rasterizer,
};
