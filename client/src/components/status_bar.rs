//! Header bar with the username and date slots and the connection state.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use chat::{ConnectionState, Session};
use leptos::prelude::*;

use crate::util::date::today_label;

/// Status bar at the top of the chat page.
///
/// Username and date are fixed for the session; only the connection
/// indicator is reactive.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let username = session.with_untracked(|s| s.username().to_string());
    let date = today_label();
    let state = move || session.with(Session::connection);

    view! {
        <header class="status-bar">
            <span id="username-display" class="status-bar__user">{username}</span>
            <span id="date-display" class="status-bar__date">{date}</span>
            <span class="status-bar__connection">
                <span class=move || connection_status_class(state())></span>
                {move || connection_label(state())}
            </span>
        </header>
    }
}

fn connection_status_class(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionState::Open => "status-bar__dot status-bar__dot--connected",
        ConnectionState::Closed => "status-bar__dot status-bar__dot--disconnected",
        ConnectionState::Errored => "status-bar__dot status-bar__dot--error",
    }
}

fn connection_label(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Connecting => "Connecting...",
        ConnectionState::Open => "Connected",
        ConnectionState::Closed => "Disconnected",
        ConnectionState::Errored => "Connection error",
    }
}
