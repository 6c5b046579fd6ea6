use super::*;

#[test]
fn parse_trims_surrounding_whitespace() {
    let name = Username::parse("  alice \n").expect("valid name");
    assert_eq!(name.as_str(), "alice");
    assert_eq!(name.to_string(), "alice");
}

#[test]
fn parse_rejects_blank_input() {
    for raw in ["", " ", "\t", "\n  \r\n"] {
        assert_eq!(Username::parse(raw), Err(UsernameError::Blank), "input {raw:?}");
    }
}

#[test]
fn parse_keeps_inner_whitespace() {
    let name = Username::parse(" big bob ").expect("valid name");
    assert_eq!(name.as_str(), "big bob");
}

#[test]
fn parse_accepts_name_at_byte_limit() {
    let raw = "a".repeat(MAX_USERNAME_BYTES);
    let name = Username::parse(&raw).expect("31 bytes is allowed");
    assert_eq!(name.as_str().len(), 31);
}

#[test]
fn parse_rejects_name_over_byte_limit() {
    let raw = "a".repeat(MAX_USERNAME_BYTES + 1);
    assert_eq!(
        Username::parse(&raw),
        Err(UsernameError::TooLong { len: 32, max: 31 })
    );
}

#[test]
fn parse_measures_bytes_not_chars() {
    // 16 two-byte characters = 32 bytes.
    let raw = "é".repeat(16);
    assert!(matches!(Username::parse(&raw), Err(UsernameError::TooLong { len: 32, .. })));
}
