//! Stateless text helpers shared by the Scroll Surface and the Input Line.
//!
//! Positions are byte offsets into UTF-8 strings; widths are display columns.

use unicode_width::UnicodeWidthChar;

/// Columns between tab stops when expanding `\t`.
pub(crate) const TAB_WIDTH: usize = 8;

/// Make one line of output safe to draw: tabs become spaces up to the next
/// tab stop and every other control character is dropped, so the display
/// width of the result is exactly what the terminal will draw.
pub(crate) fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for c in line.chars() {
        if c == '\t' {
            let spaces = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', spaces));
            col += spaces;
        } else if !c.is_control() {
            out.push(c);
            col += c.width().unwrap_or(0);
        }
    }
    out
}

/// Cut `width` display columns out of `line` starting at column `start`,
/// padding with spaces. A wide char straddling either edge is dropped, and
/// control characters never reach the output.
pub(crate) fn slice_columns(line: &str, start: usize, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut col = 0;
    let mut used = 0;
    for c in line.chars().filter(|c| !c.is_control()) {
        let w = c.width().unwrap_or(0);
        if col >= start && col + w <= start + width {
            out.push(c);
            used += w;
        }
        col += w;
        if col >= start + width {
            break;
        }
    }
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(crate) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the byte offset of the previous word boundary before `pos` in `text`.
///
/// Skips non-word characters first, then word characters, like readline's
/// `backward-word`.
pub(crate) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_columns_pads_short_lines() {
        assert_eq!(slice_columns("ab", 0, 4), "ab  ");
    }

    #[test]
    fn test_slice_columns_offset() {
        assert_eq!(slice_columns("0123456789", 3, 4), "3456");
    }

    #[test]
    fn test_slice_columns_skips_split_wide_char() {
        // '日' is two columns wide; starting at column 1 cuts it in half
        assert_eq!(slice_columns("日本", 1, 3), "本 ");
    }

    #[test]
    fn test_slice_columns_drops_control_chars() {
        assert_eq!(slice_columns("a\rb\x1b", 0, 4), "ab  ");
    }

    #[test]
    fn test_sanitize_line_expands_tabs_to_stops() {
        assert_eq!(sanitize_line("a\tb"), format!("a{}b", " ".repeat(7)));
        assert_eq!(sanitize_line("\tx"), format!("{}x", " ".repeat(8)));
        assert_eq!(sanitize_line("12345678\ty"), format!("12345678{}y", " ".repeat(8)));
    }

    #[test]
    fn test_sanitize_line_strips_carriage_returns() {
        assert_eq!(sanitize_line("done\r"), "done");
        assert_eq!(sanitize_line("\x07bell"), "bell");
    }

    #[test]
    fn test_char_boundaries_multibyte() {
        let s = "aé b";
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(next_char_boundary(s, s.len()), s.len());
    }

    #[test]
    fn test_prev_word_boundary() {
        let s = "git commit -m";
        assert_eq!(prev_word_boundary(s, s.len()), 12);
        assert_eq!(prev_word_boundary(s, 10), 4);
        assert_eq!(prev_word_boundary(s, 3), 0);
        assert_eq!(prev_word_boundary("   ", 3), 0);
    }
}
