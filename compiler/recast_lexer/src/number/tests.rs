use proptest::prelude::*;

use super::*;

#[test]
fn test_decimal() {
    assert_eq!(parse_number("0"), Some(0.0));
    assert_eq!(parse_number("42"), Some(42.0));
    assert_eq!(parse_number("0.5"), Some(0.5));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("1."), Some(1.0));
    assert_eq!(parse_number("1_000"), Some(1000.0));
    assert_eq!(parse_number("2.5e-3"), Some(0.0025));
    assert_eq!(parse_number("1E3"), Some(1000.0));
}

#[test]
fn test_radix() {
    assert_eq!(parse_number("0xff"), Some(255.0));
    assert_eq!(parse_number("0XFF"), Some(255.0));
    assert_eq!(parse_number("0b101"), Some(5.0));
    assert_eq!(parse_number("0o17"), Some(15.0));
    assert_eq!(parse_number("0xFF_FF"), Some(65535.0));
}

#[test]
fn test_bigint_suffix() {
    assert_eq!(parse_number("10n"), Some(10.0));
}

#[test]
fn test_malformed() {
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("0x"), None);
    assert_eq!(parse_number("0b2"), None);
    assert_eq!(parse_number("1e"), None);
    assert_eq!(parse_number("1e+"), None);
    assert_eq!(parse_number("1__0"), None);
    assert_eq!(parse_number("10_"), None);
}

proptest! {
    #[test]
    fn prop_integers_roundtrip(n in 0u32..=u32::MAX) {
        prop_assert_eq!(parse_number(&n.to_string()), Some(f64::from(n)));
    }

    #[test]
    fn prop_hex_matches_decimal(n in 0u32..=u32::MAX) {
        prop_assert_eq!(parse_number(&format!("0x{n:x}")), Some(f64::from(n)));
    }
}
