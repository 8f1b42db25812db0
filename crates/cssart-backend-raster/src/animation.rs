//! Keyframe sampling for the animation presets.

use cssart_spec::{AnimationPreset, Filter, FilterChain, TimingFunction};

use crate::transform::Affine;

/// The property an animation overrides at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimatedProperty {
    /// Replaces the layer transform (spin, bounce, float).
    Transform(Affine),
    /// Replaces the render-time opacity (pulse).
    Opacity(f64),
    /// Replaces the filter chain (glow).
    Filter(FilterChain),
}

/// `cubic-bezier(x1, y1, x2, y2)` evaluated at input progress `x`.
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    let bezier = |p1: f64, p2: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // bisection on the monotonic x curve
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    let mut t = x;
    for _ in 0..64 {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < 1e-12 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(y1, y2, t)
}

/// Apply a timing function to linear progress in `[0, 1]`.
pub fn ease(timing: TimingFunction, progress: f64) -> f64 {
    match timing {
        TimingFunction::Linear => progress.clamp(0.0, 1.0),
        TimingFunction::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, progress),
    }
}

/// Directed progress through the current iteration at `time` seconds.
pub fn iteration_progress(preset: AnimationPreset, time: f64) -> f64 {
    let duration = preset.duration_secs();
    let elapsed = time.max(0.0) / duration;
    let iteration = elapsed.floor();
    let progress = elapsed - iteration;
    if preset.alternate() && iteration as u64 % 2 == 1 {
        1.0 - progress
    } else {
        progress
    }
}

/// Interpolate keyframe `(offset, value)` pairs, easing each segment.
fn interpolate(stops: &[(f64, f64)], timing: TimingFunction, progress: f64) -> f64 {
    for pair in stops.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        if progress <= end {
            let local = if end > start {
                (progress - start) / (end - start)
            } else {
                1.0
            };
            return from + (to - from) * ease(timing, local);
        }
    }
    stops.last().map(|&(_, value)| value).unwrap_or(0.0)
}

/// Sample the animated property of `preset` at `time` seconds.
pub fn sample(preset: AnimationPreset, time: f64) -> AnimatedProperty {
    let progress = iteration_progress(preset, time);
    let timing = preset.timing();

    match preset {
        AnimationPreset::Spin => {
            let degrees = interpolate(&[(0.0, 0.0), (1.0, 360.0)], timing, progress);
            AnimatedProperty::Transform(Affine::rotation(degrees))
        }
        AnimationPreset::Pulse => {
            let opacity = interpolate(&[(0.0, 0.7), (0.5, 1.0), (1.0, 0.7)], timing, progress);
            AnimatedProperty::Opacity(opacity)
        }
        AnimationPreset::Bounce => {
            let dy = interpolate(&[(0.0, 0.0), (0.5, -10.0), (1.0, 0.0)], timing, progress);
            AnimatedProperty::Transform(Affine::translate_y(dy))
        }
        AnimationPreset::Float => {
            let dy = interpolate(&[(0.0, 0.0), (0.5, -20.0), (1.0, 0.0)], timing, progress);
            AnimatedProperty::Transform(Affine::translate_y(dy))
        }
        AnimationPreset::Glow => {
            let brightness = interpolate(&[(0.0, 1.0), (1.0, 1.2)], timing, progress);
            let saturate = interpolate(&[(0.0, 1.0), (1.0, 1.5)], timing, progress);
            AnimatedProperty::Filter(FilterChain::new(vec![
                Filter::Brightness { amount: brightness },
                Filter::Saturate { amount: saturate },
            ]))
        }
    }
}
