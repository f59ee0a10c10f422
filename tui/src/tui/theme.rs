use ratatui::style::{
    Color,
    Modifier,
    Style,
};

#[derive(Clone, Copy, Debug)]
pub(super) struct Theme {
    pub(super) default: Style,
    pub(super) text_default: Style,
    pub(super) text_selected: Style,
    pub(super) text_muted: Style,
    pub(super) text_local: Style,
    pub(super) border_focused: Style,
    pub(super) border_unfocused: Style,
    pub(super) indicator_passive: Style,
    pub(super) indicator_interactive: Style,
    pub(super) row_selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default: Style::default().bg(Color::Black).fg(Color::Gray),
            text_default: Style::default(),
            text_selected: Style::default().fg(Color::Yellow),
            text_muted: Style::default().fg(Color::DarkGray),
            text_local: Style::default().fg(Color::Cyan),
            border_focused: Style::default().fg(Color::White),
            border_unfocused: Style::default().fg(Color::DarkGray),
            indicator_passive: Style::default().fg(Color::Gray),
            indicator_interactive: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            row_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }
}

impl Theme {
    pub(super) fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}
