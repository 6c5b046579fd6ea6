//! WebSocket session loop for the terminal front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Session`] per connection. The loop multiplexes socket frames and
//! stdin lines on a single task, feeds them into the session, renders new
//! log entries and executes the returned actions. A server `ERROR:` ends the
//! session with a restart; anything else that closes the socket ends the
//! program.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use std::time::Duration;

use chat::{Action, ConnectionState, Session, acquire_username};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, error, info, warn};

use crate::error::ClientError;
use crate::terminal::{Terminal, today_label};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How a single session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Server rejected the session; start over after the delay.
    Restart(Duration),
    /// Connection closed or input ended; stop.
    Ended,
}

/// Run sessions against `url` until one ends without a restart.
///
/// # Errors
///
/// Fails only when the terminal itself fails (for example, stdin closes
/// while a username is being requested).
pub async fn run<T: Terminal>(url: &str, term: &mut T) -> Result<(), ClientError> {
    loop {
        let username = acquire_username(term).await?;
        term.show_header(&username, &today_label());

        match run_session(url, Session::new(username), term).await? {
            Outcome::Restart(delay) => {
                debug!(?delay, "restarting session");
                tokio::time::sleep(delay).await;
            }
            Outcome::Ended => return Ok(()),
        }
    }
}

async fn run_session<T: Terminal>(
    url: &str,
    mut session: Session,
    term: &mut T,
) -> Result<Outcome, ClientError> {
    let mut stream = match connect_async(url).await {
        Ok((stream, _)) => stream,
        Err(error) => {
            error!(%error, url, "websocket connect failed");
            let mut actions = session.on_error();
            actions.extend(session.on_close());
            for action in actions {
                if let Action::Notify(message) = action {
                    term.alert(&message).await;
                }
            }
            return Ok(Outcome::Ended);
        }
    };

    info!(url, username = %session.username(), "connected");
    let mut restart = perform(session.on_open(), &mut stream, term).await;
    let mut rendered = 0;

    while session.connection() != ConnectionState::Closed {
        let actions = tokio::select! {
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => session.on_message(text.as_str()),
                Some(Ok(Message::Close(frame))) => {
                    warn!(?frame, "websocket closed");
                    session.on_close()
                }
                Some(Ok(_)) => continue,
                Some(Err(error)) => {
                    error!(%error, "websocket error");
                    let mut actions = session.on_error();
                    actions.extend(session.on_close());
                    actions
                }
                None => {
                    warn!("websocket stream ended");
                    session.on_close()
                }
            },
            line = term.next_line() => match line? {
                Some(line) => session.send(&line),
                None => {
                    debug!("input closed");
                    if let Err(error) = stream.close(None).await {
                        debug!(%error, "close failed");
                    }
                    return Ok(Outcome::Ended);
                }
            },
        };

        for entry in &session.log()[rendered..] {
            term.render(entry);
        }
        rendered = session.log().len();

        if let Some(delay) = perform(actions, &mut stream, term).await {
            restart = Some(delay);
        }
    }

    Ok(restart.map_or(Outcome::Ended, Outcome::Restart))
}

/// Execute session actions in order. Returns the restart delay, if any.
async fn perform<T: Terminal>(
    actions: Vec<Action>,
    stream: &mut WsStream,
    term: &mut T,
) -> Option<Duration> {
    let mut restart = None;
    for action in actions {
        match action {
            Action::Transmit(text) => {
                if let Err(error) = stream.send(Message::text(text)).await {
                    warn!(%error, "send failed");
                }
            }
            Action::Notify(message) => term.alert(&message).await,
            Action::Disconnect => {
                if let Err(error) = stream.close(None).await {
                    debug!(%error, "close failed");
                }
            }
            Action::ScheduleRestart(delay) => restart = Some(delay),
            // The console consumed the line when it was read.
            Action::ClearInput => {}
        }
    }
    restart
}
