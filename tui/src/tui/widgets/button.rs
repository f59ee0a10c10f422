use crate::tui::theme::Theme;
use ratatui::{
    layout::Alignment,
    text::{
        Line,
        Span,
    },
};

/// A one-line button: `[key] label`, highlighted when `selected`.
pub(crate) fn button<'a>(key: &'a str, label: impl ToString, selected: bool, theme: &Theme) -> Line<'a> {
    let style = if selected {
        theme.text_selected
    } else {
        theme.border_unfocused
    };

    Line::from(vec![
        Span::styled(format!("[{key}] "), theme.border_focused),
        Span::styled(label.to_string(), style),
    ])
    .alignment(Alignment::Right)
}
