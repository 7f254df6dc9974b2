//! # Input Line
//!
//! The single-line field commands are typed into.
//!
//! ## Responsibilities
//!
//! - Hold the text being typed and a byte-offset cursor
//! - Apply editing keys (insert, delete, word delete, home/end)
//! - Produce a view no wider than its declared width
//!
//! The text itself is never truncated. When it is wider than the field, the
//! view slides so the cursor stays visible.
//!
//! Arrow keys are not part of `EditKey`: they belong to the Scroll Surface.
//! Cursor movement inside the line uses Ctrl+B / Ctrl+F instead.

use unicode_width::UnicodeWidthStr;

use crate::core::text::{next_char_boundary, prev_char_boundary, prev_word_boundary, slice_columns};

pub const PROMPT: &str = "> ";
pub const DEFAULT_PLACEHOLDER: &str = "Type something and press Enter...";

/// Text-editing keys understood by the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKey {
    Char(char),
    Paste(String),
    Backspace,
    Delete,
    Home,
    End,
    CursorLeft,
    CursorRight,
    DeleteWordBackward,
    DeleteToStart,
    DeleteToEnd,
}

#[derive(Debug, Clone)]
pub struct InputLine {
    text: String,
    /// Byte offset, always on a char boundary (0..=text.len())
    cursor: usize,
    width: u16,
    focused: bool,
    placeholder: String,
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl InputLine {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            width: 0,
            focused: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replace the text and move the cursor to its end.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Apply one editing key. Returns `true` if text or cursor changed.
    /// A blurred line ignores input.
    pub fn handle_key(&mut self, key: &EditKey) -> bool {
        if !self.focused {
            return false;
        }
        let pos = self.cursor;
        match key {
            EditKey::Char(c) => {
                self.text.insert(pos, *c);
                self.cursor += c.len_utf8();
                true
            }
            EditKey::Paste(pasted) => {
                // Single line: line breaks and tabs become spaces, other
                // control characters are dropped
                let flat: String = pasted
                    .chars()
                    .map(|c| if matches!(c, '\r' | '\n' | '\t') { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                self.text.insert_str(pos, &flat);
                self.cursor += flat.len();
                !flat.is_empty()
            }
            EditKey::Backspace => {
                if pos == 0 {
                    return false;
                }
                let prev = prev_char_boundary(&self.text, pos);
                self.text.drain(prev..pos);
                self.cursor = prev;
                true
            }
            EditKey::Delete => {
                if pos >= self.text.len() {
                    return false;
                }
                let next = next_char_boundary(&self.text, pos);
                self.text.drain(pos..next);
                true
            }
            EditKey::Home => self.move_to(0),
            EditKey::End => self.move_to(self.text.len()),
            EditKey::CursorLeft => self.move_to(prev_char_boundary(&self.text, pos)),
            EditKey::CursorRight => {
                if pos >= self.text.len() {
                    return false;
                }
                self.move_to(next_char_boundary(&self.text, pos))
            }
            EditKey::DeleteWordBackward => {
                let start = prev_word_boundary(&self.text, pos);
                self.delete_range(start, pos)
            }
            EditKey::DeleteToStart => self.delete_range(0, pos),
            EditKey::DeleteToEnd => self.delete_range(pos, self.text.len()),
        }
    }

    fn move_to(&mut self, pos: usize) -> bool {
        let moved = self.cursor != pos;
        self.cursor = pos;
        moved
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        self.text.drain(start..end);
        self.cursor = start;
        true
    }

    /// First visible text column: zero until the cursor would fall off the
    /// right edge, then pinned so the cursor sits in the last cell.
    fn window_start(&self) -> usize {
        let avail = (self.width as usize).saturating_sub(PROMPT.width());
        let cursor_col = self.text[..self.cursor].width();
        cursor_col.saturating_sub(avail.saturating_sub(1))
    }

    /// Prompt plus the visible slice of text (or the placeholder), exactly
    /// `width` columns wide.
    pub fn view(&self) -> String {
        let width = self.width as usize;
        let avail = width.saturating_sub(PROMPT.width());
        let body = if self.text.is_empty() {
            slice_columns(&self.placeholder, 0, avail)
        } else {
            slice_columns(&self.text, self.window_start(), avail)
        };
        slice_columns(&format!("{PROMPT}{body}"), 0, width)
    }

    /// Column of the cursor within `view()`.
    pub fn cursor_column(&self) -> u16 {
        let cursor_col = self.text[..self.cursor].width() - self.window_start();
        let col = PROMPT.width() + cursor_col;
        col.min((self.width as usize).saturating_sub(1)) as u16
    }

    /// Whether `view()` is currently showing the placeholder.
    pub fn showing_placeholder(&self) -> bool {
        self.text.is_empty()
    }
}
