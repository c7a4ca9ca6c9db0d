use super::*;
use crate::layout::PositionedWord;

fn settings(lofi_factor: u32) -> RendererSettings {
    RendererSettings {
        canvas: Canvas {
            width: 200,
            height: 120,
        },
        background: Rgb8::new(10, 20, 30),
        text_color: Rgb8::new(250, 240, 230),
        lofi_factor,
        typeface: Typeface::Block,
    }
}

fn frame_with(text: &str, x: i32, y: i32, font_size: u32) -> Frame {
    Frame {
        positioned_words: vec![PositionedWord {
            text: text.into(),
            x,
            y,
        }],
        font_size,
        start_time: 0.0,
        end_time: 1.0,
    }
}

const BG: [u8; 4] = [10, 20, 30, 255];
const FG: [u8; 4] = [250, 240, 230, 255];

#[test]
fn background_only_fills_every_pixel() {
    let mut r = FrameRenderer::new(settings(1)).unwrap();
    let out = r.render(None).unwrap();
    assert_eq!((out.width, out.height), (200, 120));
    assert!(out.premultiplied);
    assert!(out.data.chunks_exact(4).all(|p| p == BG));
}

#[test]
fn words_are_drawn_below_the_top_of_their_line() {
    let mut r = FrameRenderer::new(settings(1)).unwrap();
    // Glyph box: x 12.5..37.5, y 25..60.
    let out = r.render(Some(&frame_with("I", 10, 20, 50))).unwrap();
    assert_eq!(out.pixel(25, 40), Some(FG));
    assert_eq!(out.pixel(25, 15), Some(BG));
    assert_eq!(out.pixel(25, 70), Some(BG));
    assert_eq!(out.pixel(150, 100), Some(BG));
}

#[test]
fn renderer_is_reusable_and_deterministic() {
    let mut r = FrameRenderer::new(settings(1)).unwrap();
    let f = frame_with("ab c", 5, 5, 30);
    let a = r.render(Some(&f)).unwrap();
    let _ = r.render(None).unwrap();
    let b = r.render(Some(&f)).unwrap();
    assert_eq!(a, b);

    let mut other = FrameRenderer::new(r.settings().clone()).unwrap();
    assert_eq!(other.render(Some(&f)).unwrap(), a);
}

#[test]
fn lofi_keeps_output_size() {
    let mut r = FrameRenderer::new(settings(8)).unwrap();
    let out = r.render(Some(&frame_with("hello", 10, 10, 40))).unwrap();
    assert_eq!(out.data.len(), 200 * 120 * 4);
    assert_eq!(out.pixel(199, 119), Some(BG));
}

#[test]
fn oversized_canvas_is_rejected() {
    let mut s = settings(1);
    s.canvas.width = 70_000;
    assert!(FrameRenderer::new(s).is_err());
}

#[test]
fn block_rects_skip_whitespace() {
    let rects = block_glyph_rects("a b", 10.0);
    assert_eq!(rects.len(), 2);
    assert_eq!((rects[0].x0, rects[0].x1), (0.5, 5.5));
    assert!((rects[0].y0 - 1.0).abs() < 1e-9);
    assert!((rects[0].y1 - 8.0).abs() < 1e-9);
    assert_eq!(rects[1].x0, 12.5);
}
