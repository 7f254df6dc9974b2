//! # Command Execution
//!
//! The console never knows what a command *does*. Whatever runs it is injected
//! as a `CommandExecutor`: given the active tab's name and the submitted text,
//! it returns the text to show plus an optional failure.
//!
//! Execution is synchronous. The event loop waits for `execute()` to return
//! before it draws again.

use std::fmt;

/// A failure reported by a command executor.
///
/// Never fatal: the message is appended to the tab's output and the loop
/// keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub message: String,
}

impl CommandFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandFailure {}

/// Result of running one command: the output text, and a failure if one occurred.
///
/// Unlike `Result`, a failed command can still carry output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub failure: Option<CommandFailure>,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: None,
        }
    }

    pub fn failed(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: Some(CommandFailure::new(message)),
        }
    }
}

/// Runs a command on behalf of a tab.
pub trait CommandExecutor {
    fn execute(&self, tab: &str, command: &str) -> CommandOutput;
}

impl<F> CommandExecutor for F
where
    F: Fn(&str, &str) -> CommandOutput,
{
    fn execute(&self, tab: &str, command: &str) -> CommandOutput {
        self(tab, command)
    }
}
