//! Command-line configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use clap::Parser;

use crate::error::ClientError;

#[derive(Parser, Debug)]
#[command(name = "chatroom", about = "Terminal client for the chatroom WebSocket server")]
pub struct Cli {
    /// Server endpoint.
    #[arg(long, env = "CHATROOM_URL", default_value = chat::protocol::SERVER_URL)]
    pub url: String,

    /// Log connection diagnostics to stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn max_level(&self) -> tracing::Level {
        if self.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN }
    }
}

/// Validate a websocket endpoint, returning it trimmed.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] unless the value is a `ws://` or
/// `wss://` URL with a non-empty authority.
pub fn parse_ws_url(raw: &str) -> Result<String, ClientError> {
    let url = raw.trim();
    let host = url
        .strip_prefix("ws://")
        .or_else(|| url.strip_prefix("wss://"))
        .ok_or_else(|| ClientError::InvalidUrl(raw.to_owned()))?;
    if host.is_empty() {
        return Err(ClientError::InvalidUrl(raw.to_owned()));
    }
    Ok(url.to_owned())
}
