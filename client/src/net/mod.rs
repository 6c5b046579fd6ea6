//! Networking for the chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_client` owns the WebSocket lifecycle and executes session actions.

pub mod chat_client;
