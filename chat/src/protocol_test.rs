use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn classify_private_prefix() {
    assert_eq!(classify("[Private]hello", "alice"), Category::Private);
    assert_eq!(classify("[Private] from bob", "alice"), Category::Private);
}

#[test]
fn classify_own_requires_name_and_colon() {
    assert_eq!(classify("alice:hi", "alice"), Category::Own);
    assert_eq!(classify("alice: hi", "alice"), Category::Own);
    assert_eq!(classify("alice hi", "alice"), Category::Server);
    assert_eq!(classify("alicex:hi", "alice"), Category::Server);
}

#[test]
fn classify_unrecognized_is_server() {
    assert_eq!(classify("server update", "alice"), Category::Server);
    assert_eq!(classify("[Public] hi all", "alice"), Category::Server);
    assert_eq!(classify("", "alice"), Category::Server);
}

#[test]
fn classify_error_wins_over_other_prefixes() {
    assert_eq!(classify("ERROR:bad name", "alice"), Category::Error);
    assert_eq!(classify("ERROR:bad name", "ERROR"), Category::Error);
}

#[test]
fn classify_private_wins_over_own() {
    assert_eq!(classify("[Private]x:hi", "[Private]x"), Category::Private);
}

#[test]
fn classify_is_case_sensitive() {
    assert_eq!(classify("error:nope", "alice"), Category::Server);
    assert_eq!(classify("[private]psst", "alice"), Category::Server);
    assert_eq!(classify("Alice:hi", "alice"), Category::Server);
}

// =============================================================
// Message builders
// =============================================================

#[test]
fn registration_message_prefixes_name() {
    assert_eq!(registration_message("alice"), "SETNAME:alice");
}

#[test]
fn local_echo_uses_you_prefix() {
    assert_eq!(local_echo("hello"), "You: hello");
}

#[test]
fn css_classes_match_stylesheet() {
    assert_eq!(Category::Private.css_class(), "private-message");
    assert_eq!(Category::Own.css_class(), "user-message");
    assert_eq!(Category::Server.css_class(), "server-message");
    assert_eq!(Category::Error.css_class(), "error-message");
}

#[test]
fn restart_delay_is_one_second() {
    assert_eq!(RESTART_DELAY.as_millis(), 1000);
}
