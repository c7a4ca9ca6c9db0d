//! Render configuration: colors, container geometry, font bounds and output rate.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::color::Rgb8;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};
use crate::layout::LayoutConstraints;

/// User-facing render settings. Every field has a default, so a config file only lists overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Solid background fill.
    pub background_color: Rgb8,
    /// Lyric text color.
    pub text_color: Rgb8,
    /// Largest font size the solver may pick, in pixels.
    pub max_font_size: u32,
    /// Smallest font size the solver may pick, in pixels.
    pub min_font_size: u32,
    /// Pixelation factor; `1` disables the effect.
    pub lofi_factor: u32,
    /// Output frame size.
    pub container_size: Canvas,
    /// Top of the text block as a fraction of the container height.
    pub top_margin_fraction: f64,
    /// Maximum text block height as a fraction of the container height.
    pub usable_height_fraction: f64,
    /// Requested font family.
    pub font_family: String,
    /// Explicit font file; takes precedence over `font_family`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Output frames per second.
    pub fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_color: Rgb8::WHITE,
            text_color: Rgb8::BLACK,
            max_font_size: 400,
            min_font_size: 20,
            lofi_factor: 1,
            container_size: Canvas {
                width: 1080,
                height: 1920,
            },
            top_margin_fraction: 0.2,
            usable_height_fraction: 0.6,
            font_family: "Arial".to_owned(),
            font_path: None,
            fps: 24,
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse render config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Fail fast on settings that cannot produce a video.
    pub fn validate(&self) -> ReelResult<()> {
        let Canvas { width, height } = self.container_size;
        if width == 0 || height == 0 {
            return Err(ReelError::validation(format!(
                "container_size {width}x{height} must be non-zero"
            )));
        }
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(ReelError::validation(format!(
                "container_size {width}x{height} must be even (required for yuv420p mp4 output)"
            )));
        }
        if self.lofi_factor == 0 {
            return Err(ReelError::validation("lofi_factor must be >= 1"));
        }
        if self.fps == 0 {
            return Err(ReelError::validation("fps must be >= 1"));
        }
        if self.font_family.trim().is_empty() && self.font_path.is_none() {
            return Err(ReelError::validation(
                "font_family must be non-empty when no font_path is given",
            ));
        }
        self.layout_constraints().map(|_| ())
    }

    /// Layout bounds derived from the geometry and font settings.
    pub fn layout_constraints(&self) -> ReelResult<LayoutConstraints> {
        LayoutConstraints::new(
            self.container_size,
            self.min_font_size,
            self.max_font_size,
            self.top_margin_fraction,
            self.usable_height_fraction,
        )
    }

    /// Output frame rate.
    pub fn fps(&self) -> ReelResult<Fps> {
        Fps::new(self.fps, 1)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
