//! Modal dialog capability injected by each front-end.
//!
//! DESIGN
//! ======
//! Browsers expose blocking `prompt`/`alert`; terminals read stdin
//! asynchronously. Both fit behind an async request/response trait, so the
//! acquisition loop is written once and tested with a scripted dialog.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::borrow::Cow;
use std::future::Future;

use crate::protocol::USERNAME_PROMPT;
use crate::username::{Username, UsernameError};

/// Acquire-or-fail user dialogs.
pub trait Dialog {
    /// Failure of the dialog surface itself (for example, stdin closed).
    type Error;

    /// Ask the user for a line of text.
    ///
    /// `Ok(None)` means the user dismissed the dialog; callers may ask again.
    fn prompt(&mut self, message: &str) -> impl Future<Output = Result<Option<String>, Self::Error>>;

    /// Show a notice and wait until it is acknowledged.
    fn alert(&mut self, message: &str) -> impl Future<Output = ()>;
}

/// Prompt until the user supplies a valid username.
///
/// Blank and dismissed answers re-prompt with the standard message; an
/// over-long answer re-prompts with the reason prepended. There is no retry
/// bound.
///
/// # Errors
///
/// Propagates the dialog's own error; invalid input is never an error.
pub async fn acquire_username<D: Dialog>(dialog: &mut D) -> Result<Username, D::Error> {
    let mut message = Cow::Borrowed(USERNAME_PROMPT);
    loop {
        let Some(raw) = dialog.prompt(&message).await? else {
            message = Cow::Borrowed(USERNAME_PROMPT);
            continue;
        };
        match Username::parse(&raw) {
            Ok(username) => return Ok(username),
            Err(UsernameError::Blank) => message = Cow::Borrowed(USERNAME_PROMPT),
            Err(err @ UsernameError::TooLong { .. }) => {
                message = Cow::Owned(format!("{err}. {USERNAME_PROMPT}"));
            }
        }
    }
}
