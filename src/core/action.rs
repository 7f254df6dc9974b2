//! # Events
//!
//! Everything that can happen to the console becomes an `Event`.
//! User presses Tab? That's `Event::NextTab`. Terminal resized? That's
//! `Event::Resize { .. }`.
//!
//! `update()` takes the session and one event, mutates the session, and
//! returns an `Effect` telling the loop what to do next. Command execution
//! happens inside `update()` and blocks until the executor returns.
//!
//! ```text
//! Session + Event  →  update()  →  Session' + Effect
//! ```
//!
//! ## Routing
//!
//! `route()` is the one place that decides who receives an event:
//!
//! | Event                                   | Target  |
//! |-----------------------------------------|---------|
//! | Quit, NextTab, Submit, Resize           | Session |
//! | ScrollLeft, ScrollRight                 | Session |
//! | Navigate(arrows, page up/down)          | Surface |
//! | Edit(anything else)                     | Input   |
//!
//! Arrow keys never reach the input line's own cursor handling.

use log::{debug, info, warn};

use crate::core::geometry::Geometry;
use crate::core::input_line::EditKey;
use crate::core::state::{Readiness, Session};
use crate::core::surface::{Axis, ScrollSurface};

/// Typing this clears the active tab without running anything.
pub const CLEAR_COMMAND: &str = "clear";

/// Keys that move the active surface's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Quit,
    NextTab,
    Submit,
    ScrollLeft,
    ScrollRight,
    Navigate(NavKey),
    Resize { width: u16, height: u16 },
    Edit(EditKey),
}

/// Who handles an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Session,
    Surface,
    Input,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    None,
    Redraw,
    Quit,
}

pub fn route(event: &Event) -> Target {
    match event {
        Event::Quit
        | Event::NextTab
        | Event::Submit
        | Event::ScrollLeft
        | Event::ScrollRight
        | Event::Resize { .. } => Target::Session,
        Event::Navigate(_) => Target::Surface,
        Event::Edit(_) => Target::Input,
    }
}

pub fn update(session: &mut Session, event: Event) -> Effect {
    match (route(&event), event) {
        (Target::Input, Event::Edit(key)) => {
            if session.input.handle_key(&key) {
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        (Target::Surface, Event::Navigate(key)) => navigate(session, key),
        (Target::Session, Event::Quit) => {
            info!("Quit requested");
            Effect::Quit
        }
        (Target::Session, Event::NextTab) => next_tab(session),
        (Target::Session, Event::Submit) => submit(session),
        (Target::Session, Event::ScrollLeft) => scroll_horizontally(session, -1),
        (Target::Session, Event::ScrollRight) => scroll_horizontally(session, 1),
        (Target::Session, Event::Resize { width, height }) => resize(session, width, height),
        (target, event) => {
            warn!("Unroutable event {:?} for {:?}", event, target);
            Effect::None
        }
    }
}

fn next_tab(session: &mut Session) -> Effect {
    session.active = (session.active + 1) % session.tabs.len();
    let tab = &session.tabs[session.active];
    debug!("Switched to tab {} ({})", session.active, tab.name);

    if let Readiness::Ready(surfaces) = &mut session.readiness {
        surfaces[session.active].set_content(&tab.buffer);
    }
    session.input.focus();
    Effect::Redraw
}

fn submit(session: &mut Session) -> Effect {
    if !session.input.is_focused() || session.input.value().is_empty() {
        return Effect::None;
    }
    let command = session.input.value().to_string();
    let active = session.active;

    if command == CLEAR_COMMAND {
        debug!("Clearing tab {}", session.tabs[active].name);
        session.tabs[active].buffer.clear();
        if let Some(surface) = session.active_surface_mut() {
            surface.set_content("");
            surface.scroll_to_top();
        }
    } else {
        let tab = &mut session.tabs[active];
        info!("Executing {:?} on tab {}", command, tab.name);
        let output = session.executor.execute(&tab.name, &command);
        if let Some(failure) = &output.failure {
            warn!("Command {:?} on tab {} failed: {}", command, tab.name, failure);
        }
        tab.append_output(&output);

        if let Readiness::Ready(surfaces) = &mut session.readiness {
            let surface = &mut surfaces[active];
            surface.set_content(&tab.buffer);
            surface.scroll_to_bottom();
        }
    }

    session.input.reset();
    session.input.focus();
    Effect::Redraw
}

fn scroll_horizontally(session: &mut Session, direction: isize) -> Effect {
    let step = session.options.horizontal_step as isize;
    match session.active_surface_mut() {
        Some(surface) => {
            surface.scroll_by(direction * step, Axis::Horizontal);
            Effect::Redraw
        }
        None => Effect::None,
    }
}

fn navigate(session: &mut Session, key: NavKey) -> Effect {
    let Some(surface) = session.active_surface_mut() else {
        return Effect::None;
    };
    match key {
        NavKey::Up => surface.scroll_by(-1, Axis::Vertical),
        NavKey::Down => surface.scroll_by(1, Axis::Vertical),
        NavKey::Left => surface.scroll_by(-1, Axis::Horizontal),
        NavKey::Right => surface.scroll_by(1, Axis::Horizontal),
        NavKey::PageUp => surface.page_up(),
        NavKey::PageDown => surface.page_down(),
    }
    Effect::Redraw
}

fn resize(session: &mut Session, width: u16, height: u16) -> Effect {
    session.width = width;
    session.height = height;
    let geometry = Geometry::for_terminal(width, height);
    debug!("Resize to {}x{}: {:?}", width, height, geometry);

    match &mut session.readiness {
        Readiness::Initializing => {
            let surfaces = session
                .tabs
                .iter()
                .map(|tab| {
                    let mut surface = ScrollSurface::new(
                        geometry.surface_width,
                        geometry.surface_height,
                        session.options.wrap,
                    );
                    surface.set_content(&tab.buffer);
                    surface
                })
                .collect();
            session.readiness = Readiness::Ready(surfaces);
            info!("Layout ready with {} surfaces", session.tabs.len());
        }
        Readiness::Ready(surfaces) => {
            for (surface, tab) in surfaces.iter_mut().zip(&session.tabs) {
                surface.set_size(geometry.surface_width, geometry.surface_height);
                surface.set_content(&tab.buffer);
            }
        }
    }

    session.input.set_width(geometry.input_width);
    Effect::Redraw
}
