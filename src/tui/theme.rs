//! Colors and text styles for every region of the frame.
//!
//! A `Theme` is built once from config and handed to `draw_ui()`. Nothing
//! about styling is global.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub status: Style,
    pub active_tab: Style,
    pub inactive_tab: Style,
    pub tab_border: Style,
    pub surface_border: Style,
    pub input: Style,
    pub placeholder: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status: Style::default().fg(Color::Cyan).bg(Color::Black),
            active_tab: Style::default()
                .fg(Color::Magenta)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            inactive_tab: Style::default().fg(Color::Green).bg(Color::Black),
            tab_border: Style::default().fg(Color::DarkGray),
            surface_border: Style::default(),
            input: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            help: Style::default().fg(Color::Indexed(240)),
        }
    }
}

impl Theme {
    /// Default theme with any valid configured colors applied.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();
        if let Some(c) = parse_color("status_fg", &config.status_fg) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = parse_color("status_bg", &config.status_bg) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = parse_color("active_tab_fg", &config.active_tab_fg) {
            theme.active_tab = theme.active_tab.fg(c);
        }
        if let Some(c) = parse_color("inactive_tab_fg", &config.inactive_tab_fg) {
            theme.inactive_tab = theme.inactive_tab.fg(c);
        }
        if let Some(c) = parse_color("border_fg", &config.border_fg) {
            theme.tab_border = theme.tab_border.fg(c);
            theme.surface_border = theme.surface_border.fg(c);
        }
        if let Some(c) = parse_color("help_fg", &config.help_fg) {
            theme.help = theme.help.fg(c);
        }
        theme
    }
}

fn parse_color(field: &str, value: &Option<String>) -> Option<Color> {
    let value = value.as_deref()?;
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("Ignoring invalid color {:?} for theme.{}", value, field);
            None
        }
    }
}
