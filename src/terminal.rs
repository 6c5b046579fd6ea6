//! Console rendering surface and stdin dialogs.

use std::future::Future;
use std::io::{self, Write};

use chat::{Dialog, LogEntry, Username};
use time::OffsetDateTime;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Everything the connection loop needs from a user-facing surface.
pub trait Terminal: Dialog<Error = io::Error> {
    /// Next line typed by the user. `Ok(None)` means input is closed.
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>>;

    /// Show the session's username and date slots.
    fn show_header(&mut self, username: &Username, date: &str);

    /// Append one entry to the visible log.
    fn render(&mut self, entry: &LogEntry);
}

/// Stdin/stdout terminal.
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    pub fn stdin() -> Self {
        Self { lines: BufReader::new(tokio::io::stdin()).lines() }
    }
}

impl Dialog for Console {
    type Error = io::Error;

    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{message} ")?;
        stdout.flush()?;
        match self.lines.next_line().await? {
            Some(line) => Ok(Some(line)),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
        }
    }

    async fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}

impl Terminal for Console {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    fn show_header(&mut self, username: &Username, date: &str) {
        println!("{username} | {date}");
    }

    fn render(&mut self, entry: &LogEntry) {
        println!("{} {}", entry.category.marker(), entry.text);
    }
}

/// Today's date in the local offset, falling back to UTC when the offset
/// cannot be determined.
pub fn today_label() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.date().to_string()
}
