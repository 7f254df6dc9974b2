use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};

use crate::core::action::{Event, NavKey};
use crate::core::input_line::EditKey;

/// Block until the next event the console cares about.
pub fn next_event() -> io::Result<Event> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

/// Next already-queued event, without blocking.
pub fn poll_immediate() -> io::Result<Option<Event>> {
    while event::poll(Duration::ZERO)? {
        if let Some(event) = translate(event::read()?) {
            return Ok(Some(event));
        }
    }
    Ok(None)
}

/// Map a raw terminal event onto the console's event vocabulary.
pub fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            translate_key(key)
        }
        TermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Event::Navigate(NavKey::Up)),
            MouseEventKind::ScrollDown => Some(Event::Navigate(NavKey::Down)),
            MouseEventKind::ScrollLeft => Some(Event::Navigate(NavKey::Left)),
            MouseEventKind::ScrollRight => Some(Event::Navigate(NavKey::Right)),
            _ => None,
        },
        TermEvent::Paste(data) => Some(Event::Edit(EditKey::Paste(data))),
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<Event> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Char('c') if ctrl => Event::Quit,
        KeyCode::Esc => Event::Quit,
        KeyCode::Tab => Event::NextTab,
        KeyCode::Enter => Event::Submit,

        // Ctrl+Left/Right scroll horizontally by the configured step
        KeyCode::Left if ctrl => Event::ScrollLeft,
        KeyCode::Right if ctrl => Event::ScrollRight,

        // Arrows and paging always go to the surface
        KeyCode::Up => Event::Navigate(NavKey::Up),
        KeyCode::Down => Event::Navigate(NavKey::Down),
        KeyCode::Left => Event::Navigate(NavKey::Left),
        KeyCode::Right => Event::Navigate(NavKey::Right),
        KeyCode::PageUp => Event::Navigate(NavKey::PageUp),
        KeyCode::PageDown => Event::Navigate(NavKey::PageDown),

        // Readline-style editing
        KeyCode::Char('a') if ctrl => Event::Edit(EditKey::Home),
        KeyCode::Char('e') if ctrl => Event::Edit(EditKey::End),
        KeyCode::Char('b') if ctrl => Event::Edit(EditKey::CursorLeft),
        KeyCode::Char('f') if ctrl => Event::Edit(EditKey::CursorRight),
        KeyCode::Char('w') if ctrl => Event::Edit(EditKey::DeleteWordBackward),
        KeyCode::Char('u') if ctrl => Event::Edit(EditKey::DeleteToStart),
        KeyCode::Char('k') if ctrl => Event::Edit(EditKey::DeleteToEnd),
        KeyCode::Char(_) if ctrl => return None,

        KeyCode::Char(c) => Event::Edit(EditKey::Char(c)),
        KeyCode::Backspace => Event::Edit(EditKey::Backspace),
        KeyCode::Delete => Event::Edit(EditKey::Delete),
        KeyCode::Home => Event::Edit(EditKey::Home),
        KeyCode::End => Event::Edit(EditKey::End),
        _ => return None,
    };
    Some(event)
}
