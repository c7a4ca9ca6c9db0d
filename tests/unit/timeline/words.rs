use super::*;

fn lines(items: &[(f64, &str)]) -> Vec<LyricLine> {
    items.iter().map(|(s, t)| LyricLine::new(*s, *t)).collect()
}

#[test]
fn words_split_line_span_evenly() {
    let segs = build_segments(&lines(&[(0.0, "hello world"), (2.0, "foo")]), 4.0);
    assert_eq!(segs.len(), 2);

    assert_eq!(segs[0].start, 0.0);
    assert_eq!(segs[0].end, 2.0);
    let reveals: Vec<(&str, f64)> = segs[0]
        .words
        .iter()
        .map(|w| (w.text.as_str(), w.reveal_time))
        .collect();
    assert_eq!(reveals, vec![("hello", 0.0), ("world", 1.0)]);

    assert_eq!(segs[1].words.len(), 1);
    assert_eq!(segs[1].words[0].text, "foo");
    assert_eq!(segs[1].words[0].reveal_time, 2.0);
    assert_eq!(segs[1].end, 4.0);
}

#[test]
fn empty_lines_are_skipped_but_still_end_the_previous_span() {
    let segs = build_segments(&lines(&[(0.0, "a b"), (1.0, "   "), (3.0, "c")]), 5.0);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].end, 1.0);
    assert_eq!(segs[0].words[1].reveal_time, 0.5);
    assert_eq!(segs[1].first_reveal(), Some(3.0));
}

#[test]
fn non_positive_span_uses_fallback_duration() {
    let segs = build_segments(&lines(&[(1.0, "x y"), (1.0, "z")]), 0.5);
    assert_eq!(segs[0].end, 1.0 + FALLBACK_LINE_DURATION);
    assert_eq!(segs[0].words[1].reveal_time, 1.25);
    // Last line starts after the audio ends.
    assert_eq!(segs[1].end, 1.5);
}

#[test]
fn no_lines_no_segments() {
    assert!(build_segments(&[], 10.0).is_empty());
}

#[test]
fn reveals_are_monotone_and_cover_every_word() {
    let input = lines(&[
        (0.0, "one two three four"),
        (1.3, "five"),
        (1.3, "six seven"),
        (4.0, "  eight\tnine  ten "),
    ]);
    let segs = build_segments(&input, 6.0);

    let all: Vec<&str> = segs
        .iter()
        .flat_map(|s| s.words.iter().map(|w| w.text.as_str()))
        .collect();
    assert_eq!(
        all,
        vec![
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"
        ]
    );

    for seg in &segs {
        for pair in seg.words.windows(2) {
            assert!(pair[0].reveal_time <= pair[1].reveal_time);
        }
        assert!(seg.words.iter().all(|w| w.reveal_time < seg.end));
    }
}
