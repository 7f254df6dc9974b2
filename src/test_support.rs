//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::sync::Arc;

use crate::core::executor::{CommandExecutor, CommandOutput};
use crate::core::state::Session;

type Reply = Box<dyn Fn(&str, &str) -> CommandOutput>;

/// An executor stub that records every call and answers with a fixed rule.
pub struct RecordingExecutor {
    calls: RefCell<Vec<(String, String)>>,
    reply: Reply,
}

impl RecordingExecutor {
    /// Answers `echo:<command>`.
    pub fn echo() -> Arc<Self> {
        Self::replying(|_, command| CommandOutput::ok(format!("echo:{command}")))
    }

    pub fn replying(reply: impl Fn(&str, &str) -> CommandOutput + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: RefCell::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    /// `(tab, command)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, tab: &str, command: &str) -> CommandOutput {
        self.calls
            .borrow_mut()
            .push((tab.to_string(), command.to_string()));
        (self.reply)(tab, command)
    }
}

pub fn session_with(tabs: &[&str], executor: Arc<RecordingExecutor>) -> Session {
    Session::new(tabs.iter().copied(), executor).expect("non-empty tab list")
}

/// Creates a test Session backed by an echoing executor.
pub fn test_session(tabs: &[&str]) -> Session {
    session_with(tabs, RecordingExecutor::echo())
}
