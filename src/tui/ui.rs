use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::geometry::{
    HELP_HEIGHT, INPUT_HEIGHT, MARGIN_X, MARGIN_Y, STATUS_HEIGHT, TAB_STRIP_HEIGHT,
};
use crate::core::state::Session;
use crate::tui::component::Component;
use crate::tui::components::{InputField, StatusBar, SurfaceView, TabBar};
use crate::tui::theme::Theme;

pub const HELP_TEXT: &str = "Use Tab to switch, Ctrl+Left/Right to scroll horizontally, \
    Arrows to scroll vertically. Enter in input field.";

const LOADING_TEXT: &str = "Loading...";

/// Compose the whole frame from the session. Reads state, never changes it.
pub fn draw_ui(frame: &mut Frame, session: &Session, theme: &Theme) {
    let Some(surface) = session.active_surface() else {
        let loading = Paragraph::new(LOADING_TEXT)
            .block(Block::new().padding(Padding::new(MARGIN_X, MARGIN_X, MARGIN_Y, MARGIN_Y)));
        frame.render_widget(loading, frame.area());
        return;
    };

    use Constraint::{Length, Min};
    let content = frame.area().inner(Margin::new(MARGIN_X, MARGIN_Y));
    let layout = Layout::vertical([
        Length(STATUS_HEIGHT),
        Length(TAB_STRIP_HEIGHT),
        Min(0),
        Length(INPUT_HEIGHT),
        Length(HELP_HEIGHT),
    ]);
    let [status_area, tabs_area, surface_area, input_area, help_area] = layout.areas(content);

    let scroll_percent = (surface.line_count() > surface.height() as usize)
        .then(|| surface.scroll_percent());
    StatusBar {
        tab_name: &session.active_tab().name,
        tab_count: session.tab_count(),
        scroll_percent,
        theme,
    }
    .render(frame, status_area);

    TabBar {
        tabs: session.tabs(),
        active: session.active_index(),
        theme,
    }
    .render(frame, tabs_area);

    SurfaceView { surface, theme }.render(frame, surface_area);

    InputField {
        input: session.input(),
        theme,
    }
    .render(frame, input_area);

    frame.render_widget(Paragraph::new(HELP_TEXT).style(theme.help), help_area);
}
