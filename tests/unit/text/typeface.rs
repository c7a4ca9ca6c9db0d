use super::*;

#[test]
fn garbage_bytes_are_not_a_typeface() {
    assert!(Typeface::from_bytes(b"definitely not a font".to_vec(), 0).is_none());
}

#[test]
fn missing_font_file_falls_back_without_error() {
    let face = Typeface::resolve(
        "No Such Family 9f2c",
        Some(Path::new("/nonexistent/dir/font.ttf")),
    );
    let mut metrics = face.metrics().unwrap();
    assert!(metrics.measure("hello", 40.0) > 0.0);
    assert!(metrics.line_height(40.0) > 0.0);
}

#[test]
fn block_face_measures_with_block_metrics() {
    let face = Typeface::Block;
    assert_eq!(face.name(), "built-in block");
    let mut metrics = face.metrics().unwrap();
    assert_eq!(metrics.measure("abc", 10.0), 18.0);
}
