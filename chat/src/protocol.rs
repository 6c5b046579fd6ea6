//! Text-line wire protocol spoken with the chat server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server speaks plain text frames. The client registers once with
//! `SETNAME:<name>` and then sends raw lines. Inbound lines carry no
//! envelope; their category is derived from a handful of literal prefixes.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use std::time::Duration;

/// Fixed server endpoint.
pub const SERVER_URL: &str = "ws://localhost:9000";

/// Prefix of the registration message sent once after the socket opens.
pub const SETNAME_PREFIX: &str = "SETNAME:";

/// Prefix of a fatal, session-ending server message.
pub const ERROR_PREFIX: &str = "ERROR:";

/// Prefix of a private message relayed by the server.
pub const PRIVATE_PREFIX: &str = "[Private]";

/// Prefix prepended to locally echoed outbound messages.
pub const LOCAL_ECHO_PREFIX: &str = "You: ";

/// Delay between a server `ERROR:` and the session restart.
pub const RESTART_DELAY: Duration = Duration::from_millis(1000);

/// Text shown when asking for a username.
pub const USERNAME_PROMPT: &str = "Enter your username:";

/// Notice shown on a transport-level failure.
pub const TRANSPORT_ERROR_NOTICE: &str = "WebSocket connection error. Check if the server is running.";

/// Notice shown when the connection closes outside the restart path.
pub const DISCONNECTED_NOTICE: &str = "Disconnected from the server.";

/// Rendering category of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fatal server error (`ERROR:`). Never appended to the log.
    Error,
    /// Private message (`[Private]`).
    Private,
    /// Line authored by the local user.
    Own,
    /// Anything else the server sends.
    Server,
}

impl Category {
    /// CSS class applied to a rendered log entry.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "error-message",
            Self::Private => "private-message",
            Self::Own => "user-message",
            Self::Server => "server-message",
        }
    }

    /// Short marker used by text renderers.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Error => "!",
            Self::Private => "*",
            Self::Own => ">",
            Self::Server => " ",
        }
    }
}

/// Classify an inbound payload by prefix.
///
/// Precedence is `ERROR:`, then `[Private]`, then `<username>:`; everything
/// else is a server line.
#[must_use]
pub fn classify(text: &str, username: &str) -> Category {
    if text.starts_with(ERROR_PREFIX) {
        return Category::Error;
    }
    if text.starts_with(PRIVATE_PREFIX) {
        return Category::Private;
    }
    if text
        .strip_prefix(username)
        .is_some_and(|rest| rest.starts_with(':'))
    {
        return Category::Own;
    }
    Category::Server
}

/// Build the registration message for `username`.
#[must_use]
pub fn registration_message(username: &str) -> String {
    format!("{SETNAME_PREFIX}{username}")
}

/// Build the local echo line for an outbound message.
#[must_use]
pub fn local_echo(text: &str) -> String {
    format!("{LOCAL_ECHO_PREFIX}{text}")
}
