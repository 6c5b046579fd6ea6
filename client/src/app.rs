//! Root application component and shared context.

use chat::{Session, Username};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{chat_panel::ChatPanel, status_bar::StatusBar};
use crate::net::chat_client::spawn_chat_client;

/// Root application component.
///
/// Owns the session signal for the lifetime of the page and opens the one
/// connection it is allowed. Children read the session and the outbound
/// sender from context.
#[component]
pub fn App(username: Username) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::new(username));
    provide_context(session);
    provide_context(spawn_chat_client(session));

    view! {
        <Title text="Chatroom"/>

        <main class="chat-app">
            <StatusBar/>
            <ChatPanel/>
        </main>
    }
}

/// Mount the application on `<body>` for an acquired username.
#[cfg(feature = "csr")]
pub fn mount(username: Username) {
    leptos::mount::mount_to_body(move || view! { <App username=username.clone()/> });
}
