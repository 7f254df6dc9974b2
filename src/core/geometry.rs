//! Layout arithmetic shared by the session (to size surfaces on resize) and the
//! TUI renderer (to split the frame). Both sides read the same constants so a
//! surface is always sized to exactly the area it is drawn into.

/// Blank columns on each side of the whole frame
pub const MARGIN_X: u16 = 2;
/// Blank rows above and below the whole frame
pub const MARGIN_Y: u16 = 1;
/// Status line height
pub const STATUS_HEIGHT: u16 = 1;
/// Tab names plus the underline beneath them
pub const TAB_STRIP_HEIGHT: u16 = 2;
/// Bordered single-line input block
pub const INPUT_HEIGHT: u16 = 3;
/// Help footer height
pub const HELP_HEIGHT: u16 = 1;
/// Border cells on one side of a bordered block
pub const BORDER: u16 = 1;
/// Blank columns inside the surface border, per side
pub const SURFACE_PADDING_X: u16 = 1;

/// Sizes derived from the terminal dimensions. Every value saturates at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub surface_width: u16,
    pub surface_height: u16,
    pub input_width: u16,
}

impl Geometry {
    pub fn for_terminal(width: u16, height: u16) -> Self {
        let content_width = width.saturating_sub(2 * MARGIN_X);
        let chrome_height = 2 * MARGIN_Y
            + STATUS_HEIGHT
            + TAB_STRIP_HEIGHT
            + INPUT_HEIGHT
            + HELP_HEIGHT
            + 2 * BORDER;

        Self {
            surface_width: content_width.saturating_sub(2 * BORDER + 2 * SURFACE_PADDING_X),
            surface_height: height.saturating_sub(chrome_height),
            input_width: content_width.saturating_sub(2 * BORDER),
        }
    }
}
