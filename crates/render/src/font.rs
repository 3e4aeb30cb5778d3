//! Label font resolution.
//!
//! Fonts are named by configuration as a primary and a fallback resource.
//! They are resolved once at startup: the primary is tried first, then the
//! fallback, and only when both fail is the run aborted.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RenderError, Result};

/// Bundled monospace font, relative to the working directory
pub const DEFAULT_PRIMARY_FONT: &str = "assets/fonts/DejaVuSansMono.ttf";

/// System font commonly present on Linux hosts
pub const DEFAULT_FALLBACK_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            primary: PathBuf::from(DEFAULT_PRIMARY_FONT),
            fallback: PathBuf::from(DEFAULT_FALLBACK_FONT),
        }
    }
}

/// A font that loaded, plus where it came from.
#[derive(Clone)]
pub struct LoadedFont {
    pub font: FontArc,
    pub path: PathBuf,
    pub used_fallback: bool,
}

fn load_one(path: &Path) -> std::result::Result<FontArc, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    FontArc::try_from_vec(bytes).map_err(|e| e.to_string())
}

impl FontConfig {
    /// Load the primary font, falling back once.
    pub fn load(&self) -> Result<LoadedFont> {
        let primary_error = match load_one(&self.primary) {
            Ok(font) => {
                debug!(path = %self.primary.display(), "loaded label font");
                return Ok(LoadedFont {
                    font,
                    path: self.primary.clone(),
                    used_fallback: false,
                });
            }
            Err(e) => e,
        };

        warn!(
            path = %self.primary.display(),
            error = %primary_error,
            fallback = %self.fallback.display(),
            "primary font unavailable, trying fallback"
        );

        match load_one(&self.fallback) {
            Ok(font) => Ok(LoadedFont {
                font,
                path: self.fallback.clone(),
                used_fallback: true,
            }),
            Err(fallback_error) => Err(RenderError::FontUnavailable {
                primary: self.primary.clone(),
                primary_error,
                fallback: self.fallback.clone(),
                fallback_error,
            }),
        }
    }
}
