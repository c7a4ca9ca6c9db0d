use std::collections::HashMap;

use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::f32_key;
use crate::text::metrics::FontMetrics;

/// Sample whose extents define the shared line height.
pub(crate) const LINE_HEIGHT_SAMPLE: &str = "Ay";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    /// Red channel.
    pub(crate) r: u8,
    /// Green channel.
    pub(crate) g: u8,
    /// Blue channel.
    pub(crate) b: u8,
    /// Alpha channel.
    pub(crate) a: u8,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font_bytes` with a fresh font context.
    pub(crate) fn new(font_bytes: &[u8]) -> ReelResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ReelError::validation("no font families registered from font bytes"))?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ReelError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family name registered from the font bytes.
    pub(crate) fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape and lay out a single unwrapped line of text.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> ReelResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ReelError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Sum of glyph-run advances across all lines, trailing whitespace included.
pub(crate) fn layout_advance(layout: &parley::Layout<TextBrushRgba8>) -> f64 {
    let mut advance = 0.0f64;
    for line in layout.lines() {
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                advance += f64::from(run.advance());
            }
        }
    }
    advance
}

/// Shaped measurements for an outline font, memoized per `(text, size)`.
pub(crate) struct ParleyMetrics {
    engine: TextLayoutEngine,
    widths: HashMap<(String, u32), f64>,
    line_heights: HashMap<u32, f64>,
}

impl ParleyMetrics {
    pub(crate) fn new(font_bytes: &[u8]) -> ReelResult<Self> {
        Ok(Self {
            engine: TextLayoutEngine::new(font_bytes)?,
            widths: HashMap::new(),
            line_heights: HashMap::new(),
        })
    }
}

impl FontMetrics for ParleyMetrics {
    fn measure(&mut self, text: &str, size_px: f32) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let key = (text.to_owned(), f32_key(size_px));
        if let Some(w) = self.widths.get(&key) {
            return *w;
        }
        // Invalid sizes measure as zero; the solver never produces them.
        let w = self
            .engine
            .layout_plain(text, size_px, TextBrushRgba8::default())
            .map(|layout| layout_advance(&layout))
            .unwrap_or(0.0);
        self.widths.insert(key, w);
        w
    }

    fn line_height(&mut self, size_px: f32) -> f64 {
        let key = f32_key(size_px);
        if let Some(h) = self.line_heights.get(&key) {
            return *h;
        }
        let h = self
            .engine
            .layout_plain(LINE_HEIGHT_SAMPLE, size_px, TextBrushRgba8::default())
            .ok()
            .and_then(|layout| {
                layout.lines().next().map(|line| {
                    let m = line.metrics();
                    f64::from(m.ascent + m.descent)
                })
            })
            .unwrap_or(0.0);
        self.line_heights.insert(key, h);
        h
    }
}
