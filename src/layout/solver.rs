use crate::layout::{LayoutConstraints, measure_lines, wrap_words};
use crate::text::metrics::FontMetrics;

/// Whether `words` wrapped at `size` fit inside the target width and vertical budget.
pub fn fits<S: AsRef<str>>(
    words: &[S],
    size: u32,
    constraints: &LayoutConstraints,
    metrics: &mut dyn FontMetrics,
) -> bool {
    let target_width = constraints.target_width();
    let lines = wrap_words(words, metrics, size as f32, target_width);
    let extent = measure_lines(&lines, metrics, size as f32);
    extent.max_line_width <= target_width && extent.total_height <= constraints.vertical_budget()
}

/// Largest integer font size in `[min_font, max_font]` whose layout fits, or `min_font` when none
/// does. `min_font >= 1` is guaranteed by [`LayoutConstraints::new`], so `mid - 1` cannot wrap.
///
/// Binary search assumes feasibility is monotonic in the font size. With real font metrics a
/// larger size can move wrap points so that a layout fits where a smaller size did not; the search
/// may then settle on a size below the true maximum. This is an accepted heuristic limitation.
pub fn solve_font_size<S: AsRef<str>>(
    words: &[S],
    constraints: &LayoutConstraints,
    metrics: &mut dyn FontMetrics,
) -> u32 {
    let mut low = constraints.min_font();
    let mut high = constraints.max_font();
    let mut best = constraints.min_font();

    while low <= high {
        let mid = low + (high - low) / 2;
        if fits(words, mid, constraints, metrics) {
            best = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    best
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
