use super::*;
use crate::foundation::core::Canvas;
use crate::text::metrics::BlockMetrics;

#[path = "support.rs"]
mod support;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn layout_is_recomputed_identically() {
    let c = support::vertical_constraints(400);
    let words = ["never", "gonna", "give", "you", "up"];
    let a = layout_words(&words, &c, &mut BlockMetrics);
    let b = layout_words(&words, &c, &mut BlockMetrics);
    assert_eq!(a, b);
}

#[test]
fn every_word_is_placed_once_in_order() {
    let c = support::vertical_constraints(400);
    for words in support::generated_word_lists(30) {
        let out = layout_words(&words, &c, &mut BlockMetrics);
        let placed: Vec<&str> = out.words.iter().map(|w| w.text.as_str()).collect();
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(placed, expected);

        let wrapped: Vec<&str> = out
            .lines
            .iter()
            .flat_map(|l| l.words.iter().map(String::as_str))
            .collect();
        assert_eq!(wrapped, expected);
    }
}

#[test]
fn adding_a_word_can_shrink_and_move_earlier_words() {
    let c = support::vertical_constraints(400);
    let three = layout_words(&["hello", "world", "again"], &c, &mut BlockMetrics);
    let four = layout_words(&["hello", "world", "again", "there"], &c, &mut BlockMetrics);

    assert_eq!(three.font_size, 326);
    assert_eq!(four.font_size, 280);
    assert_eq!(three.words[1].y, 720);
    assert_eq!(four.words[1].y, 674);
}

#[test]
fn block_starts_at_top_margin() {
    let c = support::vertical_constraints(400);
    let out = layout_words(&["hi"], &c, &mut BlockMetrics);
    assert_eq!(out.font_size, 400);
    assert_eq!(out.words[0].x, 50);
    assert_eq!(out.words[0].y, 384);
}

#[test]
fn constraints_reject_bad_geometry() {
    assert!(LayoutConstraints::new(canvas(0, 1920), 20, 400, 0.2, 0.6).is_err());
    assert!(LayoutConstraints::new(canvas(100, 1920), 20, 400, 0.2, 0.6).is_err());
    assert!(LayoutConstraints::new(canvas(1080, 1920), 0, 400, 0.2, 0.6).is_err());
    assert!(LayoutConstraints::new(canvas(1080, 1920), 401, 400, 0.2, 0.6).is_err());
    assert!(LayoutConstraints::new(canvas(1080, 1920), 20, 400, 1.0, 0.6).is_err());
    assert!(LayoutConstraints::new(canvas(1080, 1920), 20, 400, 0.2, 0.0).is_err());
    assert!(LayoutConstraints::new(canvas(1080, 1920), 20, 400, 0.5, 0.6).is_err());

    let err = LayoutConstraints::new(canvas(1080, 1920), 30, 20, 0.2, 0.6).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
}

#[test]
fn constraints_derive_budgets() {
    let c = LayoutConstraints::new(canvas(1920, 1080), 20, 400, 0.25, 0.5).unwrap();
    assert_eq!(c.target_width(), 1820.0);
    assert_eq!(c.vertical_budget(), 540.0);
    assert_eq!(c.start_y(), 270.0);
}
