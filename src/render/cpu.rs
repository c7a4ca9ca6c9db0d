use vello_cpu::kurbo::{Affine, Rect};
use vello_cpu::peniko::{Blob, Color, FontData};

use crate::assets::color::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;
use crate::render::lofi::apply_lofi;
use crate::text::engine::{TextBrushRgba8, TextLayoutEngine};
use crate::text::metrics::BlockMetrics;
use crate::text::typeface::Typeface;
use crate::timeline::Frame;

/// Everything needed to build an equivalent renderer on another thread.
#[derive(Clone, Debug)]
pub struct RendererSettings {
    /// Output size.
    pub canvas: Canvas,
    /// Solid background fill.
    pub background: Rgb8,
    /// Word color.
    pub text_color: Rgb8,
    /// Pixelation factor; `1` disables it.
    pub lofi_factor: u32,
    /// Face used for drawing; must be the face the layout was measured with.
    pub typeface: Typeface,
}

enum GlyphSource {
    Outline {
        engine: Box<TextLayoutEngine>,
        font: FontData,
    },
    Block,
}

/// CPU rasterizer for lyric frames, backed by `vello_cpu`.
///
/// Holds a reusable render context and shaping state, so one renderer should be kept per thread.
pub struct FrameRenderer {
    settings: RendererSettings,
    width: u16,
    height: u16,
    glyphs: GlyphSource,
    ctx: Option<vello_cpu::RenderContext>,
}

impl FrameRenderer {
    /// Build a renderer for `settings`.
    pub fn new(settings: RendererSettings) -> ReelResult<Self> {
        let to_u16 = |v: u32, what: &str| {
            u16::try_from(v).ok().filter(|v| *v > 0).ok_or_else(|| {
                ReelError::validation(format!("canvas {what} {v} must be in 1..=65535"))
            })
        };
        let width = to_u16(settings.canvas.width, "width")?;
        let height = to_u16(settings.canvas.height, "height")?;

        let glyphs = match &settings.typeface {
            Typeface::Outline(face) => GlyphSource::Outline {
                engine: Box::new(TextLayoutEngine::new(face.bytes())?),
                font: FontData::new(Blob::from(face.bytes().as_ref().clone()), face.index()),
            },
            Typeface::Block => GlyphSource::Block,
        };

        Ok(Self {
            settings,
            width,
            height,
            glyphs,
            ctx: None,
        })
    }

    /// Settings this renderer was built from.
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Render `frame` over the background, or the bare background when `frame` is `None`.
    pub fn render(&mut self, frame: Option<&Frame>) -> ReelResult<FrameRGBA> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();

        let drawn = self.draw(&mut ctx, frame);
        let out = drawn.map(|()| {
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
            ctx.render_to_pixmap(&mut pixmap);
            FrameRGBA {
                width: u32::from(self.width),
                height: u32::from(self.height),
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            }
        });
        self.ctx = Some(ctx);

        let mut out = out?;
        apply_lofi(&mut out, self.settings.lofi_factor)?;
        Ok(out)
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        frame: Option<&Frame>,
    ) -> ReelResult<()> {
        let bg = self.settings.background;
        ctx.set_transform(Affine::IDENTITY);
        ctx.set_paint(Color::from_rgba8(bg.r, bg.g, bg.b, 255));
        ctx.fill_rect(&Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        let Some(frame) = frame else {
            return Ok(());
        };

        let fg = self.settings.text_color;
        let size = frame.font_size as f32;
        for word in &frame.positioned_words {
            let origin = Affine::translate((f64::from(word.x), f64::from(word.y)));
            match &mut self.glyphs {
                GlyphSource::Outline { engine, font } => {
                    let brush = TextBrushRgba8 {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b,
                        a: 255,
                    };
                    let layout = engine.layout_plain(&word.text, size, brush)?;
                    ctx.set_transform(origin);
                    for line in layout.lines() {
                        for item in line.items() {
                            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                                continue;
                            };
                            let brush = run.style().brush;
                            ctx.set_paint(Color::from_rgba8(brush.r, brush.g, brush.b, brush.a));
                            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                                id: g.id,
                                x: g.x,
                                y: g.y,
                            });
                            ctx.glyph_run(font)
                                .font_size(run.run().font_size())
                                .fill_glyphs(glyphs);
                        }
                    }
                }
                GlyphSource::Block => {
                    ctx.set_transform(origin);
                    ctx.set_paint(Color::from_rgba8(fg.r, fg.g, fg.b, 255));
                    for rect in block_glyph_rects(&word.text, f64::from(size)) {
                        ctx.fill_rect(&rect);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Rectangles of the built-in block face for `text`, relative to the top-left of its line box.
/// Whitespace advances without painting.
fn block_glyph_rects(text: &str, size: f64) -> Vec<Rect> {
    let advance = BlockMetrics::ADVANCE_EM * size;
    let glyph_w = BlockMetrics::GLYPH_EM * size;
    let inset = (advance - glyph_w) / 2.0;
    let baseline = BlockMetrics::ASCENT_EM * size;
    let top = baseline - BlockMetrics::CAP_EM * size;

    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| {
            let x0 = i as f64 * advance + inset;
            Rect::new(x0, top, x0 + glyph_w, baseline)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
