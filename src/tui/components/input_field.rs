//! # InputField Component
//!
//! Draws the `InputLine` in a bordered box and places the terminal cursor.
//! The placeholder is dimmed; typed text uses the input style.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::core::input_line::InputLine;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct InputField<'a> {
    pub input: &'a InputLine,
    pub theme: &'a Theme,
}

impl<'a> Component for InputField<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(self.theme.surface_border);
        let inner = block.inner(area);

        let style = if self.input.showing_placeholder() {
            self.theme.placeholder
        } else {
            self.theme.input
        };
        frame.render_widget(Paragraph::new(self.input.view()).style(style).block(block), area);

        if self.input.is_focused() && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position(Position::new(inner.x + self.input.cursor_column(), inner.y));
        }
    }
}
