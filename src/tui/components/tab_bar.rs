//! # TabBar Component
//!
//! One row of tab names with the active tab highlighted, underlined by a
//! border row. Built on ratatui's `Tabs` widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::core::state::Tab;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TabBar<'a> {
    pub tabs: &'a [Tab],
    pub active: usize,
    pub theme: &'a Theme,
}

impl<'a> Component for TabBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = self.tabs.iter().map(|tab| tab.name.as_str());
        let strip = Tabs::new(titles)
            .select(self.active)
            .style(self.theme.inactive_tab)
            .highlight_style(self.theme.active_tab)
            .divider(" ")
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.theme.tab_border),
            );
        frame.render_widget(strip, area);
    }
}
