//! Studio configuration
//!
//! Settings load from `cssart.toml` (or an explicit `--config` path) and can
//! be overridden with `CSSART_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use cssart_backend_raster::{Color, RasterOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cssart.toml";

/// Errors from loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Main configuration structure for the studio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudioConfig {
    /// Generation settings
    pub generation: GenerationConfig,
    /// Export settings
    pub export: ExportConfig,
}

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Presentational delay between the trigger and the new composition
    pub delay_ms: u64,
    /// Lower bound of the render-time layer opacity
    pub opacity_min: f64,
    /// Upper bound of the render-time layer opacity
    pub opacity_max: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            opacity_min: 0.7,
            opacity_max: 1.0,
        }
    }
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Viewport width in CSS pixels
    pub width: u32,
    /// Viewport height in CSS pixels
    pub height: u32,
    /// Output pixels per CSS pixel
    pub scale: f64,
    /// Opaque background as `#RRGGBB`
    pub background: String,
    /// Downloaded files are named `<prefix>-<unix millis>.png`
    pub file_prefix: String,
    /// Directory downloads land in
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            scale: 2.0,
            background: "#000000".to_string(),
            file_prefix: "css-art".to_string(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Parse [`ExportConfig::background`].
    pub fn background_color(&self) -> Result<Color, ConfigError> {
        parse_hex_color(&self.background).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "background must be #RRGGBB, got '{}'",
                self.background
            ))
        })
    }

    /// Raster options for a capture at `time` seconds.
    pub fn raster_options(&self, time: f64) -> Result<RasterOptions, ConfigError> {
        Ok(RasterOptions {
            background: self.background_color()?,
            scale: self.scale,
            width: self.width,
            height: self.height,
            time,
        })
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::from_rgb8([channel(0)?, channel(2)?, channel(4)?]))
}

fn parse_flag<T: std::str::FromStr>(name: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", name, value);
            None
        }
    }
}

impl StudioConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `cssart.toml` from the working directory, or defaults when it
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_from_file(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`, keyed by `CSSART_*` variable names.
    /// Unparseable values are logged and skipped.
    pub fn merge_with_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("CSSART_DELAY_MS") {
            if let Some(ms) = parse_flag("CSSART_DELAY_MS", &val) {
                self.generation.delay_ms = ms;
            }
        }
        if let Some(val) = lookup("CSSART_OPACITY_MIN") {
            if let Some(min) = parse_flag("CSSART_OPACITY_MIN", &val) {
                self.generation.opacity_min = min;
            }
        }
        if let Some(val) = lookup("CSSART_OPACITY_MAX") {
            if let Some(max) = parse_flag("CSSART_OPACITY_MAX", &val) {
                self.generation.opacity_max = max;
            }
        }

        if let Some(val) = lookup("CSSART_EXPORT_WIDTH") {
            if let Some(width) = parse_flag("CSSART_EXPORT_WIDTH", &val) {
                self.export.width = width;
            }
        }
        if let Some(val) = lookup("CSSART_EXPORT_HEIGHT") {
            if let Some(height) = parse_flag("CSSART_EXPORT_HEIGHT", &val) {
                self.export.height = height;
            }
        }
        if let Some(val) = lookup("CSSART_EXPORT_SCALE") {
            if let Some(scale) = parse_flag("CSSART_EXPORT_SCALE", &val) {
                self.export.scale = scale;
            }
        }
        if let Some(background) = lookup("CSSART_BACKGROUND") {
            self.export.background = background;
        }
        if let Some(prefix) = lookup("CSSART_FILE_PREFIX") {
            self.export.file_prefix = prefix;
        }
        if let Some(dir) = lookup("CSSART_OUT_DIR") {
            self.export.out_dir = PathBuf::from(dir);
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.generation;
        let opacity_ok = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !opacity_ok(g.opacity_min) || !opacity_ok(g.opacity_max) || g.opacity_min > g.opacity_max
        {
            return Err(ConfigError::Invalid(format!(
                "opacity range must satisfy 0 <= min <= max <= 1, got [{}, {}]",
                g.opacity_min, g.opacity_max
            )));
        }
        self.export.background_color()?;
        if !self.export.scale.is_finite() || self.export.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "export scale must be positive, got {}",
                self.export.scale
            )));
        }
        if self.export.width == 0 || self.export.height == 0 {
            return Err(ConfigError::Invalid("export size must be non-zero".to_string()));
        }
        if self.export.file_prefix.is_empty()
            || self
                .export
                .file_prefix
                .contains(|c: char| c == '/' || c == '\\')
        {
            return Err(ConfigError::Invalid(format!(
                "file prefix must be a plain file name, got '{}'",
                self.export.file_prefix
            )));
        }
        Ok(())
    }

    /// Load configuration the way the CLI does:
    /// 1. read `path`, or `cssart.toml`, or use defaults
    /// 2. override with environment variables
    /// 3. validate
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_or_default()?,
        };
        config.merge_with_env();
        config.validate()?;
        Ok(config)
    }
}
