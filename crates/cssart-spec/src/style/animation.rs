//! Named animation presets.

use serde::{Deserialize, Serialize};

/// Timing function of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    Linear,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
}

impl TimingFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingFunction::Linear => "linear",
            TimingFunction::EaseInOut => "ease-in-out",
        }
    }
}

/// One of the five predefined animations. Presets are fixed constants;
/// nothing about them is randomized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPreset {
    Spin,
    Pulse,
    Bounce,
    Float,
    Glow,
}

impl AnimationPreset {
    /// All presets in draw order.
    pub const ALL: [AnimationPreset; 5] = [
        AnimationPreset::Spin,
        AnimationPreset::Pulse,
        AnimationPreset::Bounce,
        AnimationPreset::Float,
        AnimationPreset::Glow,
    ];

    /// Keyframes name.
    pub fn name(&self) -> &'static str {
        match self {
            AnimationPreset::Spin => "spin",
            AnimationPreset::Pulse => "pulse",
            AnimationPreset::Bounce => "bounce",
            AnimationPreset::Float => "float",
            AnimationPreset::Glow => "glow",
        }
    }

    /// Iteration duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        match self {
            AnimationPreset::Spin => 10.0,
            AnimationPreset::Pulse => 3.0,
            AnimationPreset::Bounce | AnimationPreset::Glow => 2.0,
            AnimationPreset::Float => 4.0,
        }
    }

    pub fn timing(&self) -> TimingFunction {
        match self {
            AnimationPreset::Spin => TimingFunction::Linear,
            _ => TimingFunction::EaseInOut,
        }
    }

    /// Whether every other iteration runs backwards.
    pub fn alternate(&self) -> bool {
        matches!(self, AnimationPreset::Glow)
    }

    /// The CSS `animation` shorthand, e.g. `spin 10s linear infinite`.
    pub fn css(&self) -> String {
        let mut css = format!(
            "{} {}s {} infinite",
            self.name(),
            self.duration_secs(),
            self.timing().as_str()
        );
        if self.alternate() {
            css.push_str(" alternate");
        }
        css
    }

    /// The `@keyframes` rule the shorthand refers to.
    pub fn keyframes_css(&self) -> &'static str {
        match self {
            AnimationPreset::Spin => {
                "@keyframes spin {\n  from { transform: rotate(0deg); }\n  to { transform: rotate(360deg); }\n}"
            }
            AnimationPreset::Pulse => {
                "@keyframes pulse {\n  0%, 100% { opacity: 0.7; }\n  50% { opacity: 1; }\n}"
            }
            AnimationPreset::Bounce => {
                "@keyframes bounce {\n  0%, 100% { transform: translateY(0); }\n  50% { transform: translateY(-10px); }\n}"
            }
            AnimationPreset::Float => {
                "@keyframes float {\n  0%, 100% { transform: translateY(0px); }\n  50% { transform: translateY(-20px); }\n}"
            }
            AnimationPreset::Glow => {
                "@keyframes glow {\n  from { filter: brightness(1) saturate(1); }\n  to { filter: brightness(1.2) saturate(1.5); }\n}"
            }
        }
    }
}
