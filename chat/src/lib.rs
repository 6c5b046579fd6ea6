//! Session core shared by the browser and terminal chat clients.
//!
//! This crate owns the line protocol (prefix constants and message
//! classification), username acquisition, and the connection state machine.
//! It performs no I/O: hosts feed transport events into a [`Session`] and
//! carry out the [`Action`]s it returns.

pub mod dialog;
pub mod protocol;
pub mod session;
pub mod username;

pub use dialog::{Dialog, acquire_username};
pub use protocol::{Category, classify};
pub use session::{Action, ConnectionState, LogEntry, Session};
pub use username::{Username, UsernameError};
