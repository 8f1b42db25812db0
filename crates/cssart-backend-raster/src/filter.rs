//! Filter effects.
//!
//! Color filters use the Filter Effects color matrices and clamp after each
//! primitive. Blur is a Gaussian approximated by three box passes on
//! premultiplied pixels; pixels outside the buffer count as transparent.

use cssart_spec::Filter;

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// Shadow tint, matching `rgba(0,0,0,0.3)`.
pub const SHADOW: Color = Color::rgba(0.0, 0.0, 0.0, 0.3);

type Matrix3 = [[f64; 3]; 3];

fn apply_matrix(buffer: &mut PixelBuffer, m: &Matrix3, offset: f64) {
    buffer.map_in_place(|c| {
        Color::rgba(
            m[0][0] * c.r + m[0][1] * c.g + m[0][2] * c.b + offset,
            m[1][0] * c.r + m[1][1] * c.g + m[1][2] * c.b + offset,
            m[2][0] * c.r + m[2][1] * c.g + m[2][2] * c.b + offset,
            c.a,
        )
        .clamp()
    });
}

fn saturate_matrix(s: f64) -> Matrix3 {
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}

fn hue_rotate_matrix(degrees: f64) -> Matrix3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

fn scalar(amount: f64) -> Matrix3 {
    [[amount, 0.0, 0.0], [0.0, amount, 0.0], [0.0, 0.0, amount]]
}

/// Box sizes for a three-pass Gaussian approximation of `sigma`.
fn box_sizes(sigma: f64) -> [usize; 3] {
    const PASSES: f64 = 3.0;
    let ideal = (12.0 * sigma * sigma / PASSES + 1.0).sqrt();
    let mut lower = ideal.floor() as i64;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let lower = lower.max(1);
    let upper = lower + 2;
    let l = lower as f64;
    let m = ((12.0 * sigma * sigma - PASSES * l * l - 4.0 * PASSES * l - 3.0 * PASSES)
        / (-4.0 * l - 4.0))
        .round() as i64;

    let mut sizes = [0usize; 3];
    for (i, size) in sizes.iter_mut().enumerate() {
        let width = if (i as i64) < m { lower } else { upper };
        *size = width as usize;
    }
    sizes
}

/// One horizontal box pass with radius `r` over premultiplied rows.
fn box_pass_horizontal(src: &[Color], dst: &mut [Color], width: usize, height: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f64;
    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let mut acc = Color::transparent();
        // window [x - r, x + r]; outside samples are transparent
        for c in row.iter().take(r.min(width)) {
            acc = add(&acc, c);
        }
        for x in 0..width {
            if x + r < width {
                acc = add(&acc, &row[x + r]);
            }
            dst[y * width + x] = scale(&acc, norm);
            if x >= r {
                acc = sub(&acc, &row[x - r]);
            }
        }
    }
}

fn transpose(src: &[Color], width: usize, height: usize) -> Vec<Color> {
    let mut out = vec![Color::transparent(); src.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = src[y * width + x];
        }
    }
    out
}

fn add(a: &Color, b: &Color) -> Color {
    Color::rgba(a.r + b.r, a.g + b.g, a.b + b.b, a.a + b.a)
}

fn sub(a: &Color, b: &Color) -> Color {
    Color::rgba(a.r - b.r, a.g - b.g, a.b - b.b, a.a - b.a)
}

fn scale(a: &Color, k: f64) -> Color {
    Color::rgba(a.r * k, a.g * k, a.b * k, a.a * k)
}

/// Gaussian blur with standard deviation `sigma` in pixels.
pub fn gaussian_blur(buffer: &mut PixelBuffer, sigma: f64) {
    if sigma.is_nan() || sigma <= 0.0 || buffer.data.is_empty() {
        return;
    }
    let (w, h) = (buffer.width as usize, buffer.height as usize);
    let mut data: Vec<Color> = buffer.data.iter().map(Color::premultiplied).collect();
    let mut scratch = vec![Color::transparent(); data.len()];

    for size in box_sizes(sigma) {
        let r = (size - 1) / 2;
        box_pass_horizontal(&data, &mut scratch, w, h, r);
        let columns = transpose(&scratch, w, h);
        let mut blurred = vec![Color::transparent(); data.len()];
        box_pass_horizontal(&columns, &mut blurred, h, w, r);
        data = transpose(&blurred, h, w);
    }

    buffer.data = data.iter().map(|c| c.clamp().unpremultiplied().clamp()).collect();
}

/// Paint a blurred, offset, tinted copy of the buffer's alpha beneath it.
pub fn drop_shadow(buffer: &mut PixelBuffer, offset_x: f64, offset_y: f64, blur: f64) {
    let (dx, dy) = (offset_x.round() as i64, offset_y.round() as i64);
    let mut shadow = PixelBuffer::new_transparent(buffer.width, buffer.height);
    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let alpha = buffer.get_or_transparent(x as i64 - dx, y as i64 - dy).a;
            shadow.set(x, y, Color::rgba(SHADOW.r, SHADOW.g, SHADOW.b, SHADOW.a * alpha));
        }
    }
    // the blur length is twice the standard deviation
    gaussian_blur(&mut shadow, blur / 2.0);

    for (top, below) in buffer.data.iter_mut().zip(shadow.data.iter()) {
        *top = top.over(below);
    }
}

/// Apply one filter term. Lengths are multiplied by `scale`.
pub fn apply_filter(buffer: &mut PixelBuffer, filter: &Filter, scale: f64) {
    match *filter {
        Filter::Blur { radius } => gaussian_blur(buffer, radius * scale),
        Filter::Brightness { amount } => apply_matrix(buffer, &scalar(amount), 0.0),
        Filter::Contrast { amount } => apply_matrix(buffer, &scalar(amount), 0.5 - 0.5 * amount),
        Filter::Saturate { amount } => apply_matrix(buffer, &saturate_matrix(amount), 0.0),
        Filter::HueRotate { degrees } => apply_matrix(buffer, &hue_rotate_matrix(degrees), 0.0),
        Filter::DropShadow {
            offset_x,
            offset_y,
            blur,
        } => drop_shadow(buffer, offset_x * scale, offset_y * scale, blur * scale),
    }
}

/// Apply a filter chain left to right.
pub fn apply_filters<'a>(
    buffer: &mut PixelBuffer,
    filters: impl IntoIterator<Item = &'a Filter>,
    scale: f64,
) {
    for filter in filters {
        apply_filter(buffer, filter, scale);
    }
}
