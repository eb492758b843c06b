use super::*;

#[test]
fn test_no_escapes_is_fast_path() {
    assert_eq!(unescape("plain text"), None);
}

#[test]
fn test_simple_escapes() {
    assert_eq!(unescape(r"a\nb\tc"), Some("a\nb\tc".to_string()));
    assert_eq!(unescape(r#"say \"hi\""#), Some("say \"hi\"".to_string()));
    assert_eq!(unescape(r"back\\slash"), Some("back\\slash".to_string()));
    assert_eq!(unescape(r"\0"), Some("\0".to_string()));
}

#[test]
fn test_hex_and_unicode() {
    assert_eq!(unescape(r"\x41"), Some("A".to_string()));
    assert_eq!(unescape(r"\u00e9"), Some("é".to_string()));
    assert_eq!(unescape(r"\u{1F600}"), Some("\u{1F600}".to_string()));
}

#[test]
fn test_malformed_escapes_kept() {
    assert_eq!(unescape(r"\xZ1"), Some("xZ1".to_string()));
    assert_eq!(unescape(r"\q"), Some("q".to_string()));
}

#[test]
fn test_line_continuation() {
    assert_eq!(unescape("a\\\nb"), Some("ab".to_string()));
    assert_eq!(unescape("a\\\r\nb"), Some("ab".to_string()));
}
