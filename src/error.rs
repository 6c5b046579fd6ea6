//! Error type for the terminal front-end.
//!
//! Transport failures are not program errors: they are fed into the chat
//! session, which decides what the user sees. Only configuration and the
//! terminal itself can fail the process.

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid websocket URL `{0}`; expected ws:// or wss://")]
    InvalidUrl(String),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
