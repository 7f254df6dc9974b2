//! # Scroll Surface
//!
//! A fixed-size viewport over one tab's output.
//!
//! ```text
//!            x_offset
//!            ├───── width ─────┤
//!   line 0   ....................................
//!   line 1   ....................................
//!   y_offset ┌─────────────────┐.................
//!            │ visible window  │ height
//!            └─────────────────┘.................
//!   line n   ....................................
//! ```
//!
//! Content is replaced wholesale with `set_content()`, never patched. Every
//! replacement or resize reflows the lines and clamps both offsets, so the
//! offsets always point inside the reflowed content. Tabs are expanded and
//! other control characters dropped during reflow, so every row of `view()`
//! occupies exactly `width` terminal cells.

use unicode_width::UnicodeWidthStr;

use crate::core::text::{sanitize_line, slice_columns};

/// Which offset a scroll applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct ScrollSurface {
    width: u16,
    height: u16,
    /// Soft-wrap lines to `width` instead of scrolling horizontally
    wrap: bool,
    content: String,
    /// Reflowed content
    lines: Vec<String>,
    /// Display width of the widest reflowed line
    longest_line: usize,
    y_offset: usize,
    x_offset: usize,
}

impl ScrollSurface {
    pub fn new(width: u16, height: u16, wrap: bool) -> Self {
        let mut surface = Self {
            width,
            height,
            wrap,
            content: String::new(),
            lines: Vec::new(),
            longest_line: 0,
            y_offset: 0,
            x_offset: 0,
        };
        surface.reflow();
        surface
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// Replace the content and reflow it at the current width.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.reflow();
    }

    /// Resize the viewport. Wrapped content is reflowed at the new width.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.reflow();
    }

    /// Move one offset by `delta` (negative = up/left), clamped to the content.
    pub fn scroll_by(&mut self, delta: isize, axis: Axis) {
        let offset = match axis {
            Axis::Vertical => &mut self.y_offset,
            Axis::Horizontal => &mut self.x_offset,
        };
        *offset = offset.saturating_add_signed(delta);
        self.clamp_offsets();
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.height.max(1) as isize), Axis::Vertical);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.height.max(1) as isize, Axis::Vertical);
    }

    pub fn scroll_to_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// How far down the content the viewport is, 0..=100.
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_y_offset();
        if max == 0 {
            return 100;
        }
        (self.y_offset * 100 / max) as u16
    }

    /// The visible window as exactly `height` rows of exactly `width` columns.
    pub fn view(&self) -> String {
        let width = self.width as usize;
        (0..self.height as usize)
            .map(|row| {
                let line = self
                    .lines
                    .get(self.y_offset + row)
                    .map(String::as_str)
                    .unwrap_or("");
                slice_columns(line, self.x_offset, width)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    fn max_x_offset(&self) -> usize {
        self.longest_line.saturating_sub(self.width as usize)
    }

    fn clamp_offsets(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
        self.x_offset = self.x_offset.min(self.max_x_offset());
    }

    fn reflow(&mut self) {
        let width = self.width as usize;
        let lines = self.content.split('\n').map(sanitize_line);
        self.lines = if self.wrap && width > 0 {
            lines.flat_map(|line| wrap_line(&line, width)).collect()
        } else {
            lines.collect()
        };
        self.longest_line = self.lines.iter().map(|l| l.width()).max().unwrap_or(0);
        self.clamp_offsets();
    }
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let options = textwrap::Options::new(width).break_words(true);
    textwrap::wrap(line, options)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_with(content: &str, width: u16, height: u16) -> ScrollSurface {
        let mut s = ScrollSurface::new(width, height, false);
        s.set_content(content);
        s
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let s = surface_with("echo:hello\n", 20, 5);
        assert_eq!(s.line_count(), 2);
    }

    #[test]
    fn test_view_is_fixed_size() {
        let s = surface_with("a\nbb\nccc", 6, 5);
        let view = s.view();
        let rows: Vec<&str> = view.split('\n').collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.width() == 6));
        assert_eq!(rows[2], "ccc   ");
    }

    #[test]
    fn test_view_expands_tabs_and_drops_carriage_returns() {
        let s = surface_with("a\tb\r", 10, 1);
        let view = s.view();
        assert_eq!(view, format!("a{}b ", " ".repeat(7)));
        assert_eq!(view.chars().count(), 10);
        assert!(!view.chars().any(char::is_control));
        // Raw content is kept as given
        assert_eq!(s.content(), "a\tb\r");
    }

    #[test]
    fn test_crlf_output_has_no_control_chars() {
        let s = surface_with("one\r\ntwo\r\n", 5, 3);
        assert_eq!(s.view(), "one  \ntwo  \n     ");
    }

    #[test]
    fn test_view_truncates_long_lines() {
        let s = surface_with("0123456789", 4, 1);
        assert_eq!(s.view(), "0123");
    }

    #[test]
    fn test_zero_height_view_is_empty() {
        let s = surface_with("content", 10, 0);
        assert_eq!(s.view(), "");
    }

    #[test]
    fn test_vertical_scroll_clamps() {
        let mut s = surface_with("1\n2\n3\n4\n5", 5, 2);
        s.scroll_by(100, Axis::Vertical);
        assert_eq!(s.y_offset(), 3);
        assert!(s.at_bottom());
        s.scroll_by(-100, Axis::Vertical);
        assert_eq!(s.y_offset(), 0);
    }

    #[test]
    fn test_horizontal_scroll_clamps_to_longest_line() {
        let mut s = surface_with("short\n0123456789ABCDEF", 10, 2);
        s.scroll_by(5, Axis::Horizontal);
        assert_eq!(s.x_offset(), 5);
        s.scroll_by(5, Axis::Horizontal);
        assert_eq!(s.x_offset(), 6);
        s.scroll_by(-50, Axis::Horizontal);
        assert_eq!(s.x_offset(), 0);
    }

    #[test]
    fn test_horizontal_scroll_noop_when_content_fits() {
        let mut s = surface_with("fits", 10, 2);
        s.scroll_by(5, Axis::Horizontal);
        assert_eq!(s.x_offset(), 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offsets() {
        let mut s = surface_with("1\n2\n3\n4\n5\n6\n7\n8", 5, 2);
        s.scroll_to_bottom();
        assert_eq!(s.y_offset(), 6);
        s.set_content("only");
        assert_eq!(s.y_offset(), 0);
    }

    #[test]
    fn test_growing_window_clamps_offsets() {
        let mut s = surface_with("1\n2\n3\n4", 5, 2);
        s.scroll_to_bottom();
        s.set_size(5, 10);
        assert_eq!(s.y_offset(), 0);
    }

    #[test]
    fn test_page_down_moves_by_height() {
        let mut s = surface_with("1\n2\n3\n4\n5\n6\n7\n8\n9", 5, 3);
        s.page_down();
        assert_eq!(s.y_offset(), 3);
        s.page_up();
        assert_eq!(s.y_offset(), 0);
    }

    #[test]
    fn test_wrap_mode_reflows_at_width() {
        let mut s = ScrollSurface::new(5, 10, true);
        s.set_content("abcdefghij");
        assert_eq!(s.line_count(), 2);
        s.scroll_by(3, Axis::Horizontal);
        assert_eq!(s.x_offset(), 0);

        s.set_size(10, 10);
        assert_eq!(s.line_count(), 1);
    }

    #[test]
    fn test_scroll_percent() {
        let mut s = surface_with("1\n2\n3\n4\n5", 5, 1);
        assert_eq!(s.scroll_percent(), 0);
        s.scroll_to_bottom();
        assert_eq!(s.scroll_percent(), 100);
    }
}
