//! RGBA pixel buffers.

use crate::color::Color;

/// A 2D pixel buffer with straight-alpha colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new fully transparent buffer.
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::transparent())
    }

    /// Build a buffer by evaluating `f` at every pixel center.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(f64, f64) -> Color) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x as f64 + 0.5, y as f64 + 0.5));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Pixel at signed coordinates, transparent outside the buffer.
    #[inline]
    pub fn get_or_transparent(&self, x: i64, y: i64) -> Color {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            Color::transparent()
        } else {
            self.get(x as u32, y as u32)
        }
    }

    /// Bilinear sample at a point in pixel space (pixel centers sit at
    /// `i + 0.5`). Outside the buffer everything is transparent; interpolation
    /// happens on premultiplied values so transparent edges do not darken.
    pub fn sample(&self, px: f64, py: f64) -> Color {
        let x = px - 0.5;
        let y = py - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let c00 = self.get_or_transparent(x0, y0).premultiplied();
        let c10 = self.get_or_transparent(x0 + 1, y0).premultiplied();
        let c01 = self.get_or_transparent(x0, y0 + 1).premultiplied();
        let c11 = self.get_or_transparent(x0 + 1, y0 + 1).premultiplied();

        let c0 = c00.lerp(&c10, fx);
        let c1 = c01.lerp(&c11, fx);
        c0.lerp(&c1, fy).unpremultiplied()
    }

    /// Apply `f` to every pixel in place.
    pub fn map_in_place(&mut self, f: impl Fn(Color) -> Color) {
        for pixel in &mut self.data {
            *pixel = f(*pixel);
        }
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}
