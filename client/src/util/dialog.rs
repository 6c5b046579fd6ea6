//! Blocking browser dialogs behind the [`chat::Dialog`] capability.
//!
//! `window.prompt` and `window.alert` suspend the page until dismissed, so
//! the async trait methods resolve immediately. Requires a browser
//! environment; without `csr` every prompt is dismissed and alerts are
//! dropped.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::convert::Infallible;

use chat::Dialog;

/// `window.prompt` / `window.alert` dialogs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialog;

impl Dialog for BrowserDialog {
    type Error = Infallible;

    async fn prompt(&mut self, message: &str) -> Result<Option<String>, Infallible> {
        Ok(prompt(message))
    }

    async fn alert(&mut self, message: &str) {
        alert(message);
    }
}

/// Show a modal text prompt. `None` when the user cancels.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        None
    }
}

/// Show a modal notice.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
