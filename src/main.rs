//! Terminal chat client.
//!
//! Prompts for a username on stdin, connects to the chat server, prints the
//! classified message log to stdout and sends every line typed on stdin.

mod config;
mod connection;
mod error;
mod terminal;

use clap::Parser;

use crate::config::Cli;
use crate::error::ClientError;
use crate::terminal::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.max_level())
        .init();

    let url = config::parse_ws_url(&cli.url)?;
    tracing::debug!(%url, "chatroom starting");

    let mut console = Console::stdin();
    connection::run(&url, &mut console).await
}
