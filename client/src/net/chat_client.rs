//! WebSocket chat client for the browser.
//!
//! Opens exactly one connection to the fixed server endpoint, feeds socket
//! events into the shared [`Session`] signal and carries out the actions the
//! session returns: outbound frames, alerts, teardown, and the delayed page
//! reload that restarts the session after a server `ERROR:`.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! There is no reconnect. Transport failures are logged to the console and
//! surfaced once through the session; the user reloads manually.

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod chat_client_test;

use std::time::Duration;

use chat::{Action, Session};
use leptos::prelude::RwSignal;

/// Frames queued for the socket writer.
#[cfg(feature = "csr")]
enum Outbound {
    Text(String),
    Close,
}

/// Handle for queueing outbound traffic on the page's connection.
///
/// Cheap to clone; all clones feed the same socket. A default handle is not
/// connected to anything and drops whatever it is given.
#[derive(Clone, Default)]
pub struct ChatSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<Outbound>>,
}

impl ChatSender {
    /// Queue a text frame. Returns `false` when the connection is gone.
    pub fn send(&self, text: String) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(Outbound::Text(text)).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            false
        }
    }

    /// Ask the writer to close the socket.
    pub fn disconnect(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(tx) = &self.tx {
                let _ = tx.unbounded_send(Outbound::Close);
            }
        }
    }
}

/// Open the page's single connection and drive it as a local async task.
pub fn spawn_chat_client(session: RwSignal<Session>) -> ChatSender {
    #[cfg(feature = "csr")]
    {
        let (tx, rx) = futures::channel::mpsc::unbounded::<Outbound>();
        let sender = ChatSender { tx: Some(tx) };
        leptos::task::spawn_local(run_connection(session, sender.clone(), rx));
        sender
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        ChatSender::default()
    }
}

/// Carry out one session action.
///
/// [`Action::ClearInput`] is ignored here; the composer that triggered the
/// send owns its input field.
pub fn perform(action: Action, sender: &ChatSender) {
    match action {
        Action::Transmit(text) => {
            if !sender.send(text) {
                leptos::logging::warn!("outbound message dropped: connection is gone");
            }
        }
        Action::Notify(message) => crate::util::dialog::alert(&message),
        Action::Disconnect => sender.disconnect(),
        Action::ScheduleRestart(delay) => schedule_reload(delay),
        Action::ClearInput => {}
    }
}

/// Reload the page after `delay`, returning the user to the username prompt.
fn schedule_reload(delay: Duration) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().reload() {
                    log::error!("reload failed: {err:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay;
    }
}

/// Socket `readyState` once the handshake has settled.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadyState {
    Connecting,
    Open,
    Closing,
    Closed,
}

#[cfg(feature = "csr")]
impl From<gloo_net::websocket::State> for ReadyState {
    fn from(state: gloo_net::websocket::State) -> Self {
        use gloo_net::websocket::State;

        match state {
            State::Connecting => Self::Connecting,
            State::Open => Self::Open,
            State::Closing => Self::Closing,
            State::Closed => Self::Closed,
        }
    }
}

/// The connection counts as open only when the socket reports `OPEN` and no
/// error or close is already queued behind it.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn handshake_succeeded(state: ReadyState, failure_pending: bool) -> bool {
    state == ReadyState::Open && !failure_pending
}

#[cfg(feature = "csr")]
fn apply(
    session: RwSignal<Session>,
    sender: &ChatSender,
    event: impl FnOnce(&mut Session) -> Vec<Action>,
) {
    use leptos::prelude::Update;

    let actions = session.try_update(event).unwrap_or_default();
    for action in actions {
        perform(action, sender);
    }
}

#[cfg(feature = "csr")]
fn fail(session: RwSignal<Session>, sender: &ChatSender) {
    apply(session, sender, |s| {
        let mut actions = s.on_error();
        actions.extend(s.on_close());
        actions
    });
}

/// Connect, register, and pump frames until the socket closes.
#[cfg(feature = "csr")]
async fn run_connection(
    session: RwSignal<Session>,
    sender: ChatSender,
    mut rx: futures::channel::mpsc::UnboundedReceiver<Outbound>,
) {
    use futures::{FutureExt, SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, WebSocketError};

    let mut ws = match WebSocket::open(chat::protocol::SERVER_URL) {
        Ok(ws) => ws,
        Err(err) => {
            log::error!("WebSocket Error: {err}");
            fail(session, &sender);
            return;
        }
    };

    // The sink turns ready on `open` and also on `error`, so readiness alone
    // does not mean the handshake succeeded.
    if let Err(err) = futures::future::poll_fn(|cx| ws.poll_ready_unpin(cx)).await {
        log::error!("WebSocket Error: {err}");
        fail(session, &sender);
        return;
    }
    let state = ReadyState::from(ws.state());

    let (mut write, read) = ws.split();
    let mut read = read.peekable();
    let failure_pending = matches!(
        std::pin::Pin::new(&mut read).peek().now_or_never(),
        Some(None | Some(Err(_)))
    );

    if !handshake_succeeded(state, failure_pending) {
        log::error!("WebSocket Error: handshake failed ({state:?})");
        fail(session, &sender);
        return;
    }

    log::info!("Connected!");
    apply(session, &sender, Session::on_open);

    let send_task = async move {
        while let Some(outbound) = rx.next().await {
            match outbound {
                Outbound::Text(text) => {
                    if let Err(err) = write.send(Message::Text(text)).await {
                        log::warn!("WebSocket send failed: {err}");
                    }
                }
                Outbound::Close => {
                    if let Err(err) = write.close().await {
                        log::debug!("WebSocket close failed: {err}");
                    }
                    break;
                }
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => apply(session, &sender, |s| s.on_message(&text)),
                Ok(Message::Bytes(_)) => {}
                Err(WebSocketError::ConnectionClose(event)) => {
                    log::warn!("WebSocket closed: code={} reason={}", event.code, event.reason);
                    break;
                }
                Err(err) => {
                    log::error!("WebSocket Error: {err}");
                    apply(session, &sender, Session::on_error);
                }
            }
        }
    };

    // Either side finishing ends the connection.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    apply(session, &sender, Session::on_close);
}
