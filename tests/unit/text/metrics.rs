use super::*;

#[test]
fn block_metrics_scale_linearly() {
    let mut m = BlockMetrics;
    assert_eq!(m.measure("abcd", 10.0), 24.0);
    assert_eq!(m.measure("abcd", 20.0), 48.0);
    assert_eq!(m.space_width(10.0), 6.0);
    assert_eq!(m.line_height(50.0), 50.0);
    assert_eq!(m.measure("", 50.0), 0.0);
}

#[test]
fn block_metrics_count_chars_not_bytes() {
    let mut m = BlockMetrics;
    assert_eq!(m.measure("héé", 10.0), m.measure("hee", 10.0));
}
