//! Run configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, environment variables, then command-line flags
//! (applied by the binary).
//!
//! # Environment Variables
//!
//! - `HEXPLOT_EDGE`: hexagon edge length in pixels (default: 16)
//! - `HEXPLOT_OUT_DIR`: frame output directory (default: "frames")
//! - `HEXPLOT_FONT`: primary label font file
//! - `HEXPLOT_FALLBACK_FONT`: fallback label font file
//!
//! # Example File
//!
//! ```toml
//! edge = 24
//! output_dir = "out/frames"
//! parallel = true
//!
//! [fonts]
//! primary = "assets/fonts/DejaVuSansMono.ttf"
//! fallback = "/usr/share/fonts/TTF/DejaVuSans.ttf"
//!
//! [palette]
//! unit_fill = { r = 0, g = 160, b = 0 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::anim::DEFAULT_GIF_DELAY_MS;
use crate::render::{FontConfig, DEFAULT_LABEL_SCALE};
use crate::types::{Palette, DEFAULT_EDGE, MIN_EDGE};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid value for {name}: {value:?}")]
    Env { name: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub edge: u32,
    pub output_dir: PathBuf,
    pub fonts: FontConfig,
    pub palette: Palette,
    /// Label height as a fraction of the edge
    pub label_scale: f32,
    pub parallel: bool,
    pub strict_dimensions: bool,
    pub gif_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            edge: DEFAULT_EDGE,
            output_dir: PathBuf::from("frames"),
            fonts: FontConfig::default(),
            palette: Palette::default(),
            label_scale: DEFAULT_LABEL_SCALE,
            parallel: false,
            strict_dimensions: false,
            gif_delay_ms: DEFAULT_GIF_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Values are not validated here; later layers may still override them,
    /// so call [`AppConfig::validate`] once every layer is applied.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlay environment variables onto this configuration.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Overlay variables from `lookup`; unset or blank variables are ignored.
    pub fn apply_vars(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(value) = get("HEXPLOT_EDGE") {
            self.edge = value.parse().map_err(|_| ConfigError::Env {
                name: "HEXPLOT_EDGE",
                value,
            })?;
        }
        if let Some(value) = get("HEXPLOT_OUT_DIR") {
            self.output_dir = PathBuf::from(value);
        }
        if let Some(value) = get("HEXPLOT_FONT") {
            self.fonts.primary = PathBuf::from(value);
        }
        if let Some(value) = get("HEXPLOT_FALLBACK_FONT") {
            self.fonts.fallback = PathBuf::from(value);
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edge < MIN_EDGE {
            return Err(ConfigError::Validation(format!(
                "edge must be >= {}, got {}",
                MIN_EDGE, self.edge
            )));
        }
        if !(self.label_scale > 0.0 && self.label_scale <= 2.0) {
            return Err(ConfigError::Validation(format!(
                "label_scale must be in (0, 2], got {}",
                self.label_scale
            )));
        }
        if self.gif_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "gif_delay_ms must be > 0".into(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}
