use super::*;
use crate::text::metrics::BlockMetrics;

#[path = "support.rs"]
mod support;

#[test]
fn single_short_word_hits_the_ceiling() {
    let c = support::vertical_constraints(400);
    assert_eq!(solve_font_size(&["hi"], &c, &mut BlockMetrics), 400);
}

#[test]
fn width_limits_a_single_word() {
    // "hi" is 1.2em wide: 1.2 * 816 = 979.2 fits in 980, 817 does not.
    let c = support::vertical_constraints(1000);
    assert_eq!(solve_font_size(&["hi"], &c, &mut BlockMetrics), 816);

    // "hello" is 3em: 326 -> 978.
    assert_eq!(solve_font_size(&["hello"], &c, &mut BlockMetrics), 326);
}

#[test]
fn height_limits_many_lines() {
    // Four 5-letter words wrap one per line: 4s + 30 <= 1152.
    let c = support::vertical_constraints(400);
    let words = ["hello", "world", "again", "there"];
    assert_eq!(solve_font_size(&words, &c, &mut BlockMetrics), 280);
}

#[test]
fn nothing_fits_returns_min_font() {
    let c = support::vertical_constraints(400);
    let huge = "w".repeat(200);
    assert_eq!(solve_font_size(&[huge.as_str()], &c, &mut BlockMetrics), 20);
    assert!(!fits(&[huge.as_str()], 20, &c, &mut BlockMetrics));
}

#[test]
fn result_is_always_within_bounds() {
    for max_font in [20u32, 21, 64, 400] {
        let c = support::vertical_constraints(max_font);
        for words in support::generated_word_lists(40) {
            let size = solve_font_size(&words, &c, &mut BlockMetrics);
            assert!((20..=max_font).contains(&size), "size {size} for {words:?}");
            if fits(&words, 20, &c, &mut BlockMetrics) {
                assert!(fits(&words, size, &c, &mut BlockMetrics));
            }
        }
    }
}

#[test]
fn flags_non_monotonic_feasibility() {
    // Binary search is only exact when feasibility never flips from false back to true as the
    // size grows. Scan every size and report the first flip, then check the search agrees with a
    // linear scan.
    let c = support::vertical_constraints(400);
    let mut metrics = BlockMetrics;
    for words in support::generated_word_lists(25) {
        let profile: Vec<bool> = (c.min_font()..=c.max_font())
            .map(|s| fits(&words, s, &c, &mut metrics))
            .collect();
        if let Some(i) = profile.windows(2).position(|w| !w[0] && w[1]) {
            panic!(
                "feasibility is non-monotonic for {words:?}: size {} fails but {} fits",
                c.min_font() + i as u32,
                c.min_font() + i as u32 + 1
            );
        }

        let linear_best = profile
            .iter()
            .rposition(|ok| *ok)
            .map_or(c.min_font(), |i| c.min_font() + i as u32);
        assert_eq!(solve_font_size(&words, &c, &mut metrics), linear_best);
    }
}
