use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow a props pattern: they borrow what they display from the
/// `Session` and the `Theme` for the duration of one frame, and render into a
/// `Frame` within a given `Rect`. None of them own state; the session does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
