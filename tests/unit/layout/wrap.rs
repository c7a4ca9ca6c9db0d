use super::*;
use crate::layout::LayoutLine;
use crate::text::metrics::{BlockMetrics, FontMetrics};

#[path = "support.rs"]
mod support;

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| (*w).to_owned()).collect()
}

fn flatten(lines: &[LayoutLine]) -> Vec<String> {
    lines.iter().flat_map(|l| l.words.iter().cloned()).collect()
}

#[test]
fn exact_fit_stays_on_one_line() {
    let ws = words(&["ab", "cd"]);
    // 12 + 6 + 12 at size 10.
    let lines = wrap_words(&ws, &mut BlockMetrics, 10.0, 30.0);
    assert_eq!(lines.len(), 1);

    let lines = wrap_words(&ws, &mut BlockMetrics, 10.0, 29.9);
    assert_eq!(lines.len(), 2);
    assert_eq!(flatten(&lines), ws);
}

#[test]
fn oversized_word_gets_its_own_line() {
    let long = "a".repeat(30);
    let ws = vec!["a".to_owned(), long.clone(), "b".to_owned()];
    let lines = wrap_words(&ws, &mut BlockMetrics, 100.0, 980.0);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].words, vec![long]);

    let only = vec!["x".repeat(200)];
    let lines = wrap_words(&only, &mut BlockMetrics, 20.0, 980.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].words, only);
}

#[test]
fn empty_input_yields_no_lines() {
    let ws: Vec<String> = Vec::new();
    assert!(wrap_words(&ws, &mut BlockMetrics, 10.0, 100.0).is_empty());
}

#[test]
fn wrapping_preserves_word_sequence_for_any_sufficient_width() {
    let mut metrics = BlockMetrics;
    for ws in support::generated_word_lists(60) {
        for size in [12.0f32, 40.0, 97.0] {
            let widest = ws
                .iter()
                .map(|w| metrics.measure(w, size))
                .fold(0.0, f64::max);
            for extra in [0.0, 17.0, 250.0, 5000.0] {
                let max_width = widest + extra;
                let lines = wrap_words(&ws, &mut metrics, size, max_width);

                assert_eq!(flatten(&lines), ws);
                for line in &lines {
                    assert!(!line.is_empty());
                    for w in &line.words {
                        assert!(ws.contains(w), "word {w:?} was altered");
                    }
                    if line.len() > 1 {
                        let joined = line.words.join(" ");
                        assert!(metrics.measure(&joined, size) <= max_width + 1e-9);
                    }
                }
            }
        }
    }
}
