//! Word layout: greedy wrapping, block measurement, font-size search and word positioning.
//!
//! Every frame is laid out from scratch by [`layout_words`]. Adding a word can shrink the solved
//! font size and move every earlier word, so layouts are never reused incrementally.

pub(crate) mod measure;
pub(crate) mod position;
pub(crate) mod solver;
pub(crate) mod wrap;

use serde::Serialize;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};
use crate::text::metrics::FontMetrics;

pub use measure::{BlockExtent, measure_lines};
pub use position::{Alignment, PositionedWord, line_alignment, position_words};
pub use solver::{fits, solve_font_size};
pub use wrap::wrap_words;

/// Horizontal padding on each side of the text block, in pixels.
pub const HORIZONTAL_PADDING: f64 = 50.0;
/// Vertical gap between consecutive lines, in pixels.
pub const LINE_SPACING: f64 = 10.0;
/// Natural-width fill ratio above which a last line is justified instead of left-aligned.
pub const JUSTIFY_FILL_THRESHOLD: f64 = 0.85;

/// Words that share one rendered line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LayoutLine {
    /// Words in reading order.
    pub words: Vec<String>,
}

impl LayoutLine {
    /// Number of words on the line.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return `true` when the line holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Container geometry and font bounds shared by every frame of a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConstraints {
    canvas: Canvas,
    min_font: u32,
    max_font: u32,
    top_margin_fraction: f64,
    usable_height_fraction: f64,
}

impl LayoutConstraints {
    /// Validate and build constraints.
    pub fn new(
        canvas: Canvas,
        min_font: u32,
        max_font: u32,
        top_margin_fraction: f64,
        usable_height_fraction: f64,
    ) -> ReelResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ReelError::validation(format!(
                "container size {}x{} must be non-zero",
                canvas.width, canvas.height
            )));
        }
        if canvas.width_f64() <= 2.0 * HORIZONTAL_PADDING {
            return Err(ReelError::validation(format!(
                "container width {} leaves no room inside {HORIZONTAL_PADDING}px side padding",
                canvas.width
            )));
        }
        if min_font == 0 {
            return Err(ReelError::validation("min font size must be >= 1"));
        }
        if min_font > max_font {
            return Err(ReelError::validation(format!(
                "min font size {min_font} exceeds max font size {max_font}"
            )));
        }
        if !(0.0..1.0).contains(&top_margin_fraction) {
            return Err(ReelError::validation(format!(
                "top_margin_fraction {top_margin_fraction} must be in [0, 1)"
            )));
        }
        if !(usable_height_fraction > 0.0 && usable_height_fraction <= 1.0) {
            return Err(ReelError::validation(format!(
                "usable_height_fraction {usable_height_fraction} must be in (0, 1]"
            )));
        }
        if top_margin_fraction + usable_height_fraction > 1.0 + 1e-9 {
            return Err(ReelError::validation(format!(
                "top_margin_fraction {top_margin_fraction} + usable_height_fraction {usable_height_fraction} exceeds the container"
            )));
        }
        Ok(Self {
            canvas,
            min_font,
            max_font,
            top_margin_fraction,
            usable_height_fraction,
        })
    }

    /// Container size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Smallest font size the solver may return.
    pub fn min_font(&self) -> u32 {
        self.min_font
    }

    /// Largest font size the solver may return.
    pub fn max_font(&self) -> u32 {
        self.max_font
    }

    /// Wrap and justification budget: container width minus side padding.
    pub fn target_width(&self) -> f64 {
        self.canvas.width_f64() - 2.0 * HORIZONTAL_PADDING
    }

    /// Maximum text block height.
    pub fn vertical_budget(&self) -> f64 {
        self.canvas.height_f64() * self.usable_height_fraction
    }

    /// Top of the text block. Fixed so the block does not jump as words are added.
    pub fn start_y(&self) -> f64 {
        (self.canvas.height_f64() * self.top_margin_fraction).floor()
    }
}

/// Complete geometry of one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameLayout {
    /// Solved font size in pixels.
    pub font_size: u32,
    /// Wrapped lines at `font_size`.
    pub lines: Vec<LayoutLine>,
    /// Word positions in reading order.
    pub words: Vec<PositionedWord>,
}

/// Lay out `words` from scratch: solve the font size, wrap at that size, then position.
pub fn layout_words<S: AsRef<str>>(
    words: &[S],
    constraints: &LayoutConstraints,
    metrics: &mut dyn FontMetrics,
) -> FrameLayout {
    let font_size = solve_font_size(words, constraints, metrics);
    let lines = wrap_words(
        words,
        metrics,
        font_size as f32,
        constraints.target_width(),
    );
    let positioned = position_words(&lines, font_size, constraints, metrics);
    FrameLayout {
        font_size,
        lines,
        words: positioned,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frame.rs"]
mod tests;
