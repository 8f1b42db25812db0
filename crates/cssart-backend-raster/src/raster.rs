//! The raster boundary and the CPU reference rasterizer.

use cssart_spec::error::BackendError;
use cssart_spec::validation::validate_composition;
use cssart_spec::{LayerStyle, RenderTarget};
use thiserror::Error;

use crate::animation::{self, AnimatedProperty};
use crate::buffer::PixelBuffer;
use crate::clip::ClipRegion;
use crate::color::{self, Color};
use crate::filter;
use crate::gradient;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig, PngError};
use crate::transform::Affine;

/// Largest output edge in pixels.
pub const MAX_OUTPUT_DIMENSION: u32 = 8192;

/// Errors from rasterization and encoding.
#[derive(Debug, Error)]
pub enum RasterizationError {
    #[error("render target holds no layers")]
    NotMounted,

    #[error("unsupported content: {0}")]
    UnsupportedContent(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("encoding failed: {0}")]
    Encoding(#[from] PngError),
}

impl BackendError for RasterizationError {
    fn code(&self) -> &'static str {
        match self {
            RasterizationError::NotMounted => "RASTER_001",
            RasterizationError::UnsupportedContent(_) => "RASTER_002",
            RasterizationError::InvalidDimensions(_) => "RASTER_003",
            RasterizationError::Encoding(_) => "RASTER_004",
        }
    }

    fn category(&self) -> &'static str {
        "raster"
    }
}

/// Capture options.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    /// Opaque color beneath every layer.
    pub background: Color,
    /// Output pixels per CSS pixel.
    pub scale: f64,
    /// Viewport width in CSS pixels.
    pub width: u32,
    /// Viewport height in CSS pixels.
    pub height: u32,
    /// Animation clock in seconds.
    pub time: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: Color::black(),
            scale: 2.0,
            width: 800,
            height: 800,
            time: 0.0,
        }
    }
}

impl RasterOptions {
    /// Output size in pixels, `width*scale x height*scale`.
    pub fn output_size(&self) -> Result<(u32, u32), RasterizationError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RasterizationError::InvalidDimensions(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        let w = (self.width as f64 * self.scale).round();
        let h = (self.height as f64 * self.scale).round();
        if w < 1.0 || h < 1.0 || w > MAX_OUTPUT_DIMENSION as f64 || h > MAX_OUTPUT_DIMENSION as f64 {
            return Err(RasterizationError::InvalidDimensions(format!(
                "{}x{} at scale {} gives {}x{}, allowed 1..={}",
                self.width, self.height, self.scale, w, h, MAX_OUTPUT_DIMENSION
            )));
        }
        Ok((w as u32, h as u32))
    }
}

/// A captured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    buffer: PixelBuffer,
}

/// PNG bytes of a captured frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPng {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of `data`.
    pub hash: String,
}

impl RasterImage {
    pub fn new(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Encode as PNG with fixed settings.
    pub fn encode_png(&self, config: &PngConfig) -> Result<EncodedPng, RasterizationError> {
        let (data, hash) = write_rgba_to_vec_with_hash(&self.buffer, config)?;
        Ok(EncodedPng {
            data,
            width: self.buffer.width,
            height: self.buffer.height,
            hash,
        })
    }
}

/// Renders a mounted composition to pixels.
pub trait Rasterizer {
    fn rasterize(
        &self,
        target: &RenderTarget,
        options: &RasterOptions,
    ) -> Result<RasterImage, RasterizationError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(
        &self,
        target: &RenderTarget,
        options: &RasterOptions,
    ) -> Result<RasterImage, RasterizationError> {
        (**self).rasterize(target, options)
    }
}

/// Software rasterizer following CSS painting order for each layer:
/// background, filter, clip, then transform and blend onto the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuRasterizer;

impl CpuRasterizer {
    pub fn new() -> Self {
        Self
    }

    fn check_target(target: &RenderTarget, options: &RasterOptions) -> Result<(), RasterizationError> {
        if target.is_empty() {
            return Err(RasterizationError::NotMounted);
        }
        if !options.time.is_finite() || options.time < 0.0 {
            return Err(RasterizationError::UnsupportedContent(format!(
                "animation time must be a non-negative number, got {}",
                options.time
            )));
        }
        if target.opacities().len() != target.composition().len() {
            return Err(RasterizationError::UnsupportedContent(format!(
                "{} opacities for {} layers",
                target.opacities().len(),
                target.composition().len()
            )));
        }
        if let Some(bad) = target
            .opacities()
            .iter()
            .find(|o| !o.is_finite() || !(0.0..=1.0).contains(*o))
        {
            return Err(RasterizationError::UnsupportedContent(format!(
                "opacity {} outside [0, 1]",
                bad
            )));
        }

        let result = validate_composition(target.composition());
        if let Some(error) = result.errors.first() {
            return Err(RasterizationError::UnsupportedContent(error.to_string()));
        }
        Ok(())
    }

    fn render_layer(
        canvas: &mut PixelBuffer,
        layer: &LayerStyle,
        opacity: f64,
        options: &RasterOptions,
    ) {
        let mut transform = Affine::from_transform(&layer.transform);
        let mut opacity = opacity;
        let mut filters = layer.filter_chain.clone();

        if let Some(preset) = layer.animation {
            match animation::sample(preset, options.time) {
                AnimatedProperty::Transform(animated) => transform = animated,
                AnimatedProperty::Opacity(animated) => opacity = animated,
                AnimatedProperty::Filter(animated) => filters = animated,
            }
        }
        let transform = transform.scaled_translation(options.scale);
        if transform.determinant().abs() < 1e-12 {
            return;
        }

        let (w, h) = (canvas.width, canvas.height);
        let mut local = gradient::paint(&layer.background, w, h);
        filter::apply_filters(&mut local, filters.iter(), options.scale);
        ClipRegion::resolve(&layer.clip_shape, w as f64, h as f64).apply(&mut local);

        let center = (w as f64 / 2.0, h as f64 / 2.0);
        for y in 0..h {
            for x in 0..w {
                let Some((lx, ly)) = transform.inverse_map(center, x as f64 + 0.5, y as f64 + 0.5)
                else {
                    continue;
                };
                let src = local.sample(lx, ly);
                if src.a <= 0.0 {
                    continue;
                }
                let dst = canvas.get(x, y);
                canvas.set(x, y, color::blend(layer.blend_mode, &dst, &src, opacity));
            }
        }
    }
}

impl Rasterizer for CpuRasterizer {
    fn rasterize(
        &self,
        target: &RenderTarget,
        options: &RasterOptions,
    ) -> Result<RasterImage, RasterizationError> {
        let (width, height) = options.output_size()?;
        Self::check_target(target, options)?;

        let background = Color {
            a: 1.0,
            ..options.background
        };
        let mut canvas = PixelBuffer::new(width, height, background.clamp());
        for (layer, opacity) in target.layers() {
            Self::render_layer(&mut canvas, layer, opacity, options);
        }

        log::debug!(
            "rasterized {} layers to {}x{} at t={}s",
            target.composition().len(),
            width,
            height,
            options.time
        );
        Ok(RasterImage::new(canvas))
    }
}
