//! # Session State
//!
//! Everything the console knows, in one struct. No terminal types here:
//! the TUI adapter reads a `Session` to draw and feeds it `Event`s.
//!
//! ```text
//! Session
//! ├── tabs: Vec<Tab>                    // fixed at startup, N >= 1
//! │   └── Tab { name, buffer }          // accumulated output per tab
//! ├── active: usize                     // always < tabs.len()
//! ├── readiness: Readiness              // Initializing | Ready(surfaces)
//! ├── input: InputLine                  // the one input field, focused
//! ├── width, height: u16                // last known terminal size
//! ├── executor: Arc<dyn CommandExecutor>
//! └── options: SessionOptions           // scroll step, wrap mode
//! ```
//!
//! State changes only happen through `update(session, event)` in action.rs.

use std::fmt;
use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::executor::{CommandExecutor, CommandOutput};
use crate::core::input_line::InputLine;
use crate::core::surface::ScrollSurface;

/// Columns moved by one horizontal scroll (Ctrl+Left / Ctrl+Right).
pub const DEFAULT_HORIZONTAL_STEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A session needs at least one tab.
    NoTabs,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoTabs => write!(f, "at least one tab name is required"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: String,
    /// Accumulated command output
    pub buffer: String,
}

impl Tab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buffer: String::new(),
        }
    }

    /// Append one newline-terminated block for a command's output.
    ///
    /// A separating newline is inserted only when the buffer has content
    /// that doesn't already end in one. A failure message follows the
    /// output text directly, before the block's trailing newline.
    pub fn append_output(&mut self, output: &CommandOutput) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(&output.text);
        if let Some(failure) = &output.failure {
            self.buffer.push_str(&failure.message);
        }
        self.buffer.push('\n');
    }
}

/// Whether terminal geometry is known yet.
///
/// Surfaces only exist once the first resize has been seen, so there is no
/// state in which rendering could reach for a surface that isn't there.
#[derive(Debug, Clone)]
pub enum Readiness {
    /// Waiting for the first resize
    Initializing,
    /// One surface per tab, same order as `tabs`
    Ready(Vec<ScrollSurface>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub horizontal_step: usize,
    pub wrap: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            horizontal_step: DEFAULT_HORIZONTAL_STEP,
            wrap: false,
        }
    }
}

pub struct Session {
    pub(crate) tabs: Vec<Tab>,
    pub(crate) active: usize,
    pub(crate) readiness: Readiness,
    pub(crate) input: InputLine,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) executor: Arc<dyn CommandExecutor>,
    pub(crate) options: SessionOptions,
}

impl Session {
    pub fn new<S: Into<String>>(
        tab_names: impl IntoIterator<Item = S>,
        executor: Arc<dyn CommandExecutor>,
    ) -> Result<Self, SessionError> {
        let tabs: Vec<Tab> = tab_names.into_iter().map(Tab::new).collect();
        if tabs.is_empty() {
            return Err(SessionError::NoTabs);
        }

        let mut input = InputLine::default();
        input.focus();

        Ok(Self {
            tabs,
            active: 0,
            readiness: Readiness::Initializing,
            input,
            width: 0,
            height: 0,
            executor,
            options: SessionOptions::default(),
        })
    }

    pub fn from_config(
        executor: Arc<dyn CommandExecutor>,
        config: &ResolvedConfig,
    ) -> Result<Self, SessionError> {
        let session = Self::new(config.tabs.iter().cloned(), executor)?;
        Ok(session.with_options(SessionOptions {
            horizontal_step: config.horizontal_step,
            wrap: config.wrap,
        }))
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    /// Stored output of the tab at `index`.
    pub fn buffer(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.buffer.as_str())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.readiness, Readiness::Ready(_))
    }

    pub fn readiness(&self) -> &Readiness {
        &self.readiness
    }

    pub fn surfaces(&self) -> Option<&[ScrollSurface]> {
        match &self.readiness {
            Readiness::Ready(surfaces) => Some(surfaces),
            Readiness::Initializing => None,
        }
    }

    pub fn surface(&self, index: usize) -> Option<&ScrollSurface> {
        self.surfaces().and_then(|s| s.get(index))
    }

    pub fn active_surface(&self) -> Option<&ScrollSurface> {
        self.surface(self.active)
    }

    pub(crate) fn active_surface_mut(&mut self) -> Option<&mut ScrollSurface> {
        match &mut self.readiness {
            Readiness::Ready(surfaces) => surfaces.get_mut(self.active),
            Readiness::Initializing => None,
        }
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
