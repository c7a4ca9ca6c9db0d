/// Text measurement capability consumed by the layout algorithms.
///
/// Sizes are in pixels; results are in pixels at that size.
pub trait FontMetrics {
    /// Horizontal advance of `text` rendered at `size_px`.
    fn measure(&mut self, text: &str, size_px: f32) -> f64;

    /// Height of one line at `size_px`, derived from a fixed reference sample so every line of a
    /// layout shares it.
    fn line_height(&mut self, size_px: f32) -> f64;

    /// Width of a single inter-word space at `size_px`.
    fn space_width(&mut self, size_px: f32) -> f64 {
        self.measure(" ", size_px)
    }
}

/// Fixed-advance metrics of the built-in block face.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockMetrics;

impl BlockMetrics {
    /// Advance of every character, in em.
    pub const ADVANCE_EM: f64 = 0.6;
    /// Painted glyph width, in em.
    pub const GLYPH_EM: f64 = 0.5;
    /// Painted glyph height above the baseline, in em.
    pub const CAP_EM: f64 = 0.7;
    /// Ascent above the baseline, in em.
    pub const ASCENT_EM: f64 = 0.8;
    /// Descent below the baseline, in em.
    pub const DESCENT_EM: f64 = 0.2;
}

impl FontMetrics for BlockMetrics {
    fn measure(&mut self, text: &str, size_px: f32) -> f64 {
        text.chars().count() as f64 * Self::ADVANCE_EM * f64::from(size_px)
    }

    fn line_height(&mut self, size_px: f32) -> f64 {
        (Self::ASCENT_EM + Self::DESCENT_EM) * f64::from(size_px)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
