#![cfg(not(feature = "csr"))]

use super::*;
use futures::executor::block_on;

#[test]
fn prompt_is_dismissed_outside_browser() {
    assert_eq!(prompt("Enter your username:"), None);
}

#[test]
fn browser_dialog_reports_dismissal_not_failure() {
    let mut dialog = BrowserDialog;
    let answer = block_on(dialog.prompt("Enter your username:"));
    assert_eq!(answer, Ok(None));
}
