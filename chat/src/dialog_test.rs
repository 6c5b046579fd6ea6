use super::*;
use futures::executor::block_on;
use std::collections::VecDeque;

/// Dialog that replays canned answers and records every prompt shown.
struct ScriptedDialog {
    answers: VecDeque<Result<Option<String>, &'static str>>,
    prompts: Vec<String>,
    alerts: Vec<String>,
}

impl ScriptedDialog {
    fn new(answers: Vec<Result<Option<&str>, &'static str>>) -> Self {
        Self {
            answers: answers
                .into_iter()
                .map(|a| a.map(|opt| opt.map(ToOwned::to_owned)))
                .collect(),
            prompts: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

impl Dialog for ScriptedDialog {
    type Error = &'static str;

    async fn prompt(&mut self, message: &str) -> Result<Option<String>, Self::Error> {
        self.prompts.push(message.to_owned());
        self.answers.pop_front().unwrap_or(Err("script exhausted"))
    }

    async fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

#[test]
fn acquire_returns_first_valid_answer() {
    let mut dialog = ScriptedDialog::new(vec![Ok(Some("alice"))]);
    let name = block_on(acquire_username(&mut dialog)).expect("username");
    assert_eq!(name.as_str(), "alice");
    assert_eq!(dialog.prompts, vec![USERNAME_PROMPT.to_owned()]);
}

#[test]
fn acquire_reprompts_on_blank_and_dismissed_answers() {
    let mut dialog = ScriptedDialog::new(vec![
        Ok(Some("")),
        Ok(Some("   ")),
        Ok(None),
        Ok(Some("\t\n")),
        Ok(Some("  alice  ")),
    ]);
    let name = block_on(acquire_username(&mut dialog)).expect("username");
    assert_eq!(name.as_str(), "alice");
    assert_eq!(dialog.prompts.len(), 5);
    assert!(dialog.prompts.iter().all(|p| p == USERNAME_PROMPT));
    assert!(dialog.alerts.is_empty());
}

#[test]
fn acquire_explains_over_long_answers() {
    let long = "x".repeat(40);
    let mut dialog = ScriptedDialog::new(vec![Ok(Some(long.as_str())), Ok(Some("bob"))]);
    let name = block_on(acquire_username(&mut dialog)).expect("username");
    assert_eq!(name.as_str(), "bob");
    assert_eq!(dialog.prompts[0], USERNAME_PROMPT);
    assert!(dialog.prompts[1].starts_with("username is 40 bytes"));
    assert!(dialog.prompts[1].ends_with(USERNAME_PROMPT));
}

#[test]
fn acquire_propagates_dialog_failure() {
    let mut dialog = ScriptedDialog::new(vec![Ok(Some(" ")), Err("stdin closed")]);
    let err = block_on(acquire_username(&mut dialog)).expect_err("dialog failure");
    assert_eq!(err, "stdin closed");
    assert_eq!(dialog.prompts.len(), 2);
}
