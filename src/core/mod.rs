//! # Core Console Logic
//!
//! The session state machine. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Event (input)        │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌──────────────┐
//!              │    TUI     │        │   Command    │
//!              │  Adapter   │        │   Executor   │
//!              │ (ratatui)  │        │  (injected)  │
//!              └────────────┘        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct, all console state in one place
//! - [`action`]: The `Event` enum, the routing table, and `update()`
//! - [`surface`]: Per-tab scrollable viewport
//! - [`input_line`]: The single-line command field
//! - [`executor`]: The injected command-execution capability
//! - [`geometry`]: Layout sizes derived from the terminal size
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod executor;
pub mod geometry;
pub mod input_line;
pub mod state;
pub mod surface;
pub(crate) mod text;
