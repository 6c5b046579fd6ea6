//! Message log and composer.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use chat::{Action, Category, Session};
use leptos::prelude::*;

use crate::net::chat_client::{ChatSender, perform};

/// Chat panel showing the session log and an input for sending messages.
///
/// The log follows new entries to the bottom unconditionally.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let sender = StoredValue::new(expect_context::<ChatSender>());

    let input = RwSignal::new(String::new());
    let log_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = session.with(|s| s.log().len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = log_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let actions = session
            .try_update(|s| s.send(&input.get_untracked()))
            .unwrap_or_default();
        for action in actions {
            match action {
                Action::ClearInput => input.set(String::new()),
                other => sender.with_value(|tx| perform(other, tx)),
            }
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <section class="chat-panel">
            <div id="chat-box" class="chat-panel__messages" node_ref=log_ref>
                {move || {
                    session
                        .with(|s| {
                            if s.log().is_empty() {
                                return view! {
                                    <div class="chat-panel__empty">"No messages yet"</div>
                                }
                                    .into_any();
                            }

                            s.log()
                                .iter()
                                .map(|entry| {
                                    let class = entry_class(entry.category);
                                    let text = entry.text.clone();
                                    view! { <div class=class>{text}</div> }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    id="message"
                    class="chat-panel__input"
                    type="text"
                    autocomplete="off"
                    placeholder="Type a message, or @name to whisper"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click>
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// Enter submits; its default action is suppressed by the caller.
fn is_send_key(key: &str) -> bool {
    key == "Enter"
}

fn entry_class(category: Category) -> String {
    format!("message {}", category.css_class())
}
