use super::*;
use crate::layout::{LayoutLine, wrap_words};
use crate::text::metrics::{BlockMetrics, FontMetrics};

#[path = "support.rs"]
mod support;

fn line(words: &[&str]) -> LayoutLine {
    LayoutLine {
        words: words.iter().map(|w| (*w).to_owned()).collect(),
    }
}

#[test]
fn short_last_line_is_left_aligned_from_padding() {
    let c = support::vertical_constraints(400);
    let out = position_words(&[line(&["hello", "world"])], 100, &c, &mut BlockMetrics);
    assert_eq!(
        out,
        vec![
            PositionedWord {
                text: "hello".into(),
                x: 50,
                y: 384
            },
            PositionedWord {
                text: "world".into(),
                x: 410,
                y: 384
            },
        ]
    );
}

#[test]
fn inner_lines_are_justified_and_single_words_left_aligned() {
    let c = support::vertical_constraints(400);
    let lines = [line(&["aaaa", "bbbb", "cc"]), line(&["d"])];
    let out = position_words(&lines, 100, &c, &mut BlockMetrics);

    // widths 240, 240, 120 -> gap (980 - 600) / 2 = 190.
    let xs: Vec<i32> = out.iter().map(|w| w.x).collect();
    assert_eq!(xs, vec![50, 480, 910, 50]);
    assert_eq!(out[0].y, 384);
    assert_eq!(out[3].y, 384 + 100 + 10);
}

#[test]
fn nearly_full_last_line_is_justified() {
    let c = support::vertical_constraints(400);
    // natural width 900 / 980 > 0.85.
    let out = position_words(&[line(&["aaaaaaa", "bbbbbbb"])], 100, &c, &mut BlockMetrics);
    assert_eq!(out[0].x, 50);
    assert_eq!(out[1].x, 610);
}

#[test]
fn alignment_rules() {
    assert_eq!(line_alignment(true, 3, 500.0, 980.0), Alignment::Left);
    assert_eq!(line_alignment(true, 3, 900.0, 980.0), Alignment::Justify);
    assert_eq!(line_alignment(false, 3, 100.0, 980.0), Alignment::Justify);
    assert_eq!(line_alignment(false, 1, 970.0, 980.0), Alignment::Left);
    assert_eq!(line_alignment(true, 1, 970.0, 980.0), Alignment::Left);
}

#[test]
fn justified_lines_span_the_target_width_and_left_lines_increase() {
    let c = support::vertical_constraints(400);
    let mut metrics = BlockMetrics;
    for words in support::generated_word_lists(60) {
        for size in [30u32, 55, 90] {
            let lines = wrap_words(&words, &mut metrics, size as f32, c.target_width());
            let positioned = position_words(&lines, size, &c, &mut metrics);
            assert_eq!(positioned.len(), words.len());

            let space = metrics.space_width(size as f32);
            let mut cursor = 0usize;
            for (idx, l) in lines.iter().enumerate() {
                let placed = &positioned[cursor..cursor + l.len()];
                cursor += l.len();

                let widths: Vec<f64> = l.words.iter().map(|w| metrics.measure(w, size as f32)).collect();
                let natural = widths.iter().sum::<f64>() + (l.len() - 1) as f64 * space;
                let is_last = idx + 1 == lines.len();
                match line_alignment(is_last, l.len(), natural, c.target_width()) {
                    Alignment::Justify => {
                        let last = placed.last().unwrap();
                        let right = f64::from(last.x) + widths[widths.len() - 1];
                        let expected = 50.0 + c.target_width();
                        assert!(
                            (right - expected).abs() <= 1.0,
                            "justified line ends at {right}, expected {expected}"
                        );
                    }
                    Alignment::Left => {
                        assert_eq!(placed[0].x, 50);
                        for pair in placed.windows(2) {
                            assert!(pair[1].x > pair[0].x);
                        }
                    }
                }
                assert!(placed.iter().all(|w| w.y == placed[0].y));
            }
        }
    }
}
