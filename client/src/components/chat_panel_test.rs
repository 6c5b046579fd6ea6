use super::*;

#[test]
fn only_enter_sends() {
    assert!(is_send_key("Enter"));
    assert!(!is_send_key("enter"));
    assert!(!is_send_key("a"));
    assert!(!is_send_key("Tab"));
}

#[test]
fn entry_class_combines_base_and_category() {
    assert_eq!(entry_class(Category::Private), "message private-message");
    assert_eq!(entry_class(Category::Own), "message user-message");
    assert_eq!(entry_class(Category::Server), "message server-message");
}
