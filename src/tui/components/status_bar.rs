//! # StatusBar Component
//!
//! Top line showing which tab is active, how many there are, and how far
//! down the active tab's output the view is.
//!
//! Purely presentational: every field is a prop copied from the session when
//! the frame is built.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct StatusBar<'a> {
    pub tab_name: &'a str,
    pub tab_count: usize,
    /// `None` when the output fits without scrolling
    pub scroll_percent: Option<u16>,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn text(&self) -> String {
        let mut text = format!(
            "Active: {} | Total: {} | Ctrl+C to quit | Type clear to clear tab",
            self.tab_name, self.tab_count
        );
        if let Some(percent) = self.scroll_percent {
            text.push_str(&format!(" | {percent}%"));
        }
        text
    }
}

impl<'a> Component for StatusBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Style fills the whole line, not just the text
        let bar = Paragraph::new(format!(" {}", self.text())).style(self.theme.status);
        frame.render_widget(bar, area);
    }
}
