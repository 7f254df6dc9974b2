//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the frame,
//! and translates crossterm events into core `Event` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Strictly turn-based. The loop blocks on the next terminal event, applies
//! it (and anything else already queued) through `update()`, then draws once.
//! A command submitted with Enter runs inside `update()`, so the UI does not
//! respond to keys until the executor returns.
//!
//! Crossterm doesn't report the initial size as an event, so the loop feeds
//! one synthetic `Resize` before waiting for input.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::sync::Arc;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, Event, update};
use crate::core::config::ResolvedConfig;
use crate::core::executor::CommandExecutor;
use crate::core::state::Session;
use crate::tui::theme::Theme;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig, executor: Arc<dyn CommandExecutor>) -> io::Result<()> {
    let mut session = Session::from_config(executor, &config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let theme = Theme::from_config(&config.theme);
    info!(
        "Starting session with tabs {:?}",
        session.tabs().iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
    );

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut session, &theme));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut Session,
    theme: &Theme,
) -> io::Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    update(session, Event::Resize { width, height });

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, session, theme))?;
            needs_redraw = false;
        }

        // Apply the next event plus everything already queued before drawing
        let mut pending = Some(event::next_event()?);
        while let Some(ev) = pending {
            match update(session, ev) {
                Effect::Quit => {
                    info!("Exiting event loop");
                    return Ok(());
                }
                Effect::Redraw => needs_redraw = true,
                Effect::None => debug!("Event changed nothing"),
            }
            pending = event::poll_immediate()?;
        }
    }
}
