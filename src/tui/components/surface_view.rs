//! # SurfaceView Component
//!
//! Draws the active tab's `ScrollSurface` inside a rounded border. The
//! surface has already been sized to this block's inner area, so its
//! `view()` is drawn as-is with no further wrapping.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::geometry::SURFACE_PADDING_X;
use crate::core::surface::ScrollSurface;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct SurfaceView<'a> {
    pub surface: &'a ScrollSurface,
    pub theme: &'a Theme,
}

impl<'a> Component for SurfaceView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.surface_border)
            .padding(Padding::horizontal(SURFACE_PADDING_X));

        let body = Paragraph::new(self.surface.view()).block(block);
        frame.render_widget(body, area);
    }
}
