//! Connection state machine and message log for one chat session.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session starts when a username has been acquired and ends when the
//! connection closes. Hosts translate transport events into calls on
//! [`Session`] and execute the returned [`Action`]s in order. The session
//! never touches the network or the screen itself.
//!
//! ```text
//! Connecting --open--> Open --close--> Closed
//!      |                 |  \--ERROR:--> Closed (restart pending)
//!      \-----error-------+--> Errored --close--> Closed
//! ```

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use crate::protocol::{
    Category, DISCONNECTED_NOTICE, RESTART_DELAY, TRANSPORT_ERROR_NOTICE, classify, local_echo,
    registration_message,
};
use crate::username::Username;

/// Lifecycle of the single connection owned by a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// Socket created, handshake in progress.
    #[default]
    Connecting,
    /// Handshake complete; registration has been sent.
    Open,
    /// Terminal state. No reconnect follows.
    Closed,
    /// Transport failure observed; a close usually follows.
    Errored,
}

/// One rendered line of the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub category: Category,
    pub text: String,
}

/// Work the host must carry out on behalf of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Send a text frame over the connection. Fire-and-forget.
    Transmit(String),
    /// Show a modal notice to the user.
    Notify(String),
    /// Tear down the connection.
    Disconnect,
    /// Restart the whole session (back to username acquisition) after a delay.
    ScheduleRestart(Duration),
    /// Clear the message input field.
    ClearInput,
}

/// Explicit session state, exclusively owned by the host's event loop.
#[derive(Clone, Debug)]
pub struct Session {
    username: Username,
    connection: ConnectionState,
    log: Vec<LogEntry>,
    restart_pending: bool,
}

impl Session {
    #[must_use]
    pub fn new(username: Username) -> Self {
        Self {
            username,
            connection: ConnectionState::Connecting,
            log: Vec::new(),
            restart_pending: false,
        }
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// All entries appended so far, oldest first.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// True once a server `ERROR:` has scheduled a restart.
    #[must_use]
    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }

    /// The socket finished its handshake. Sends the registration message.
    pub fn on_open(&mut self) -> Vec<Action> {
        if self.connection != ConnectionState::Connecting {
            return Vec::new();
        }
        self.connection = ConnectionState::Open;
        vec![Action::Transmit(registration_message(self.username.as_str()))]
    }

    /// A text frame arrived.
    ///
    /// `ERROR:` lines close the session and schedule a restart; every other
    /// line is classified and appended to the log. Frames arriving outside
    /// `Open` are dropped.
    pub fn on_message(&mut self, text: &str) -> Vec<Action> {
        if self.connection != ConnectionState::Open {
            return Vec::new();
        }
        match classify(text, self.username.as_str()) {
            Category::Error => {
                self.connection = ConnectionState::Closed;
                self.restart_pending = true;
                vec![
                    Action::Notify(text.to_owned()),
                    Action::Disconnect,
                    Action::ScheduleRestart(RESTART_DELAY),
                ]
            }
            category => {
                self.append(category, text.to_owned());
                Vec::new()
            }
        }
    }

    /// The transport reported a failure.
    pub fn on_error(&mut self) -> Vec<Action> {
        match self.connection {
            ConnectionState::Connecting | ConnectionState::Open => {
                self.connection = ConnectionState::Errored;
                vec![Action::Notify(TRANSPORT_ERROR_NOTICE.to_owned())]
            }
            ConnectionState::Closed | ConnectionState::Errored => Vec::new(),
        }
    }

    /// The connection closed.
    ///
    /// Silent when the session already closed itself for a restart.
    pub fn on_close(&mut self) -> Vec<Action> {
        if self.connection == ConnectionState::Closed {
            return Vec::new();
        }
        self.connection = ConnectionState::Closed;
        vec![Action::Notify(DISCONNECTED_NOTICE.to_owned())]
    }

    /// The user asked to send the contents of the input field.
    ///
    /// Blank input is ignored. Otherwise the trimmed text is transmitted,
    /// echoed locally as `You: <text>`, and the input is cleared. Input is
    /// left untouched while the connection is not open.
    pub fn send(&mut self, input: &str) -> Vec<Action> {
        let text = input.trim();
        if text.is_empty() || self.connection != ConnectionState::Open {
            return Vec::new();
        }
        self.append(Category::Own, local_echo(text));
        vec![Action::Transmit(text.to_owned()), Action::ClearInput]
    }

    fn append(&mut self, category: Category, text: String) {
        self.log.push(LogEntry { category, text });
    }
}
