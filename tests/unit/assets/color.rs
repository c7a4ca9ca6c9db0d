use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::parse_hex("00FF80").unwrap(), Rgb8::new(0, 255, 128));
    assert_eq!(Rgb8::parse_hex("  #8ace00 ").unwrap(), Rgb8::new(0x8a, 0xce, 0x00));
}

#[test]
fn malformed_hex_names_the_input() {
    for bad in ["#fff", "#12345g", "", "#1234567", "#ééé"] {
        let err = Rgb8::parse_hex(bad).unwrap_err();
        assert!(err.to_string().contains("validation error:"));
        assert!(err.to_string().contains(bad));
    }
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgb8 = serde_json::from_value(json!("#0a0B0c")).unwrap();
    assert_eq!(c, Rgb8::new(10, 11, 12));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#0A0B0C"));
    assert!(serde_json::from_value::<Rgb8>(json!("nope")).is_err());
}
