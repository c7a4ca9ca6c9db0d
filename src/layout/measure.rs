use crate::layout::{LINE_SPACING, LayoutLine};
use crate::text::metrics::FontMetrics;

/// Bounding box of a wrapped line set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockExtent {
    /// Widest line, measured as its words joined by single spaces.
    pub max_line_width: f64,
    /// `lines * line_height + spacing * (lines - 1)`.
    pub total_height: f64,
    /// Shared height of every line.
    pub line_height: f64,
}

/// Measure `lines` at `size_px`.
pub fn measure_lines(
    lines: &[LayoutLine],
    metrics: &mut dyn FontMetrics,
    size_px: f32,
) -> BlockExtent {
    let line_height = metrics.line_height(size_px);
    let mut max_line_width = 0.0f64;
    for line in lines {
        let joined = line.words.join(" ");
        max_line_width = max_line_width.max(metrics.measure(&joined, size_px));
    }

    let n = lines.len() as f64;
    let total_height = if lines.is_empty() {
        0.0
    } else {
        n * line_height + LINE_SPACING * (n - 1.0)
    };

    BlockExtent {
        max_line_width,
        total_height,
        line_height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
