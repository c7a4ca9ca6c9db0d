use crate::layout::LayoutLine;
use crate::text::metrics::FontMetrics;

/// Greedily wrap `words` into lines no wider than `max_width` at `size_px`.
///
/// A word always starts a line it does not fit on, so a word wider than `max_width` ends up alone
/// on its own line; words are never split.
pub fn wrap_words<S: AsRef<str>>(
    words: &[S],
    metrics: &mut dyn FontMetrics,
    size_px: f32,
    max_width: f64,
) -> Vec<LayoutLine> {
    let space_width = metrics.space_width(size_px);

    let mut lines = Vec::new();
    let mut current = LayoutLine::default();
    let mut current_width = 0.0f64;

    for word in words {
        let word = word.as_ref();
        let word_width = metrics.measure(word, size_px);

        if current.is_empty() {
            current.words.push(word.to_owned());
            current_width = word_width;
            continue;
        }

        let candidate = current_width + space_width + word_width;
        if candidate <= max_width {
            current.words.push(word.to_owned());
            current_width = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.words.push(word.to_owned());
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
