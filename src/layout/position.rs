use serde::Serialize;

use crate::layout::{
    HORIZONTAL_PADDING, JUSTIFY_FILL_THRESHOLD, LINE_SPACING, LayoutConstraints, LayoutLine,
};
use crate::text::metrics::FontMetrics;

/// One word placed on the canvas. `y` is the top of its line box.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PositionedWord {
    /// Word text.
    pub text: String,
    /// Left edge in pixels.
    pub x: i32,
    /// Top of the line in pixels.
    pub y: i32,
}

/// Horizontal alignment chosen for a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Natural spacing from the left padding.
    Left,
    /// Gaps stretched so the line spans the full target width.
    Justify,
}

/// Pick the alignment for one line.
///
/// Single-word lines and a last line that is not nearly full are left-aligned; everything else is
/// justified. Justifying a nearly full last line keeps it from jumping when it later wraps.
pub fn line_alignment(
    is_last: bool,
    word_count: usize,
    natural_width: f64,
    target_width: f64,
) -> Alignment {
    let is_full_enough = natural_width / target_width > JUSTIFY_FILL_THRESHOLD;
    if (is_last && !is_full_enough) || word_count == 1 {
        Alignment::Left
    } else {
        Alignment::Justify
    }
}

/// Compute pixel positions for every word of `lines` at `font_size`.
pub fn position_words(
    lines: &[LayoutLine],
    font_size: u32,
    constraints: &LayoutConstraints,
    metrics: &mut dyn FontMetrics,
) -> Vec<PositionedWord> {
    let size = font_size as f32;
    let target_width = constraints.target_width();
    let space_width = metrics.space_width(size);
    let line_advance = metrics.line_height(size) + LINE_SPACING;
    let block_x = ((constraints.canvas().width_f64() - target_width) / 2.0).floor();

    let mut out = Vec::with_capacity(lines.iter().map(LayoutLine::len).sum());
    let mut y = constraints.start_y();

    for (idx, line) in lines.iter().enumerate() {
        let widths: Vec<f64> = line.words.iter().map(|w| metrics.measure(w, size)).collect();
        let sum_words: f64 = widths.iter().sum();
        let n = line.words.len();
        let natural_width = sum_words + n.saturating_sub(1) as f64 * space_width;
        let is_last = idx + 1 == lines.len();

        match line_alignment(is_last, n, natural_width, target_width) {
            Alignment::Left => {
                let mut x = HORIZONTAL_PADDING;
                for (word, w) in line.words.iter().zip(&widths) {
                    out.push(PositionedWord {
                        text: word.clone(),
                        x: x as i32,
                        y: y as i32,
                    });
                    x += w + space_width;
                }
            }
            Alignment::Justify => {
                let gap = if n > 1 {
                    (target_width - sum_words) / (n - 1) as f64
                } else {
                    0.0
                };
                let mut x = block_x;
                for (word, w) in line.words.iter().zip(&widths) {
                    out.push(PositionedWord {
                        text: word.clone(),
                        x: x as i32,
                        y: y as i32,
                    });
                    x += w + gap;
                }
            }
        }

        y += line_advance;
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
