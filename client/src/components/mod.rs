//! UI components for the chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `status_bar` renders the username/date slots and connection state;
//! `chat_panel` renders the log and the message composer.

pub mod chat_panel;
pub mod status_bar;
