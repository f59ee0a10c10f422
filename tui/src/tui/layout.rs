use eyre::{
    bail,
    Result,
};
use ratatui::{
    layout::{
        Constraint,
        Direction,
        Flex,
        Layout,
        Margin,
    },
    prelude::Rect,
};

/// Split the screen: status header and main area
pub(crate) fn header_and_main_area(area: Rect) -> Result<[Rect; 2]> {
    let constraints = vec![
        Constraint::Max(2), // Header
        Constraint::Min(0), // Main area
    ];

    let [header_area, area] = *Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
    else {
        bail!("Failed to split the area");
    };

    Ok([header_area, area])
}

/// The chat modal's outer frame, centered over the call screen.
pub(crate) fn chat_modal_area(area: Rect) -> Rect {
    center(area, Constraint::Percentage(80), Constraint::Percentage(85))
}

/// Inside of the chat modal frame, below the header line and above the hint
/// line.
pub(crate) fn chat_modal_body(area: Rect) -> Rect {
    let inner = chat_modal_area(area).inner(Margin::new(1, 1));
    let [_header, body, _hints] = Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .areas(inner);
    body
}

/// Header and hint lines of the chat modal.
pub(crate) fn chat_modal_header_and_hints(area: Rect) -> [Rect; 2] {
    let inner = chat_modal_area(area).inner(Margin::new(1, 1));
    let [header, _body, hints] = Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .areas(inner);
    [header, hints]
}

/// Centers a [`Rect`] within another [`Rect`] using the provided [`Constraint`]s.
///
/// # Examples
///
/// ```ignore
/// use ratatui::layout::{Constraint, Rect};
///
/// let area = Rect::new(0, 0, 100, 100);
/// let horizontal = Constraint::Percentage(20);
/// let vertical = Constraint::Percentage(30);
///
/// let centered = center(area, horizontal, vertical);
/// ```
pub(crate) fn center(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_body_sits_inside_modal() {
        let screen = Rect::new(0, 0, 100, 40);
        let modal = chat_modal_area(screen);
        let body = chat_modal_body(screen);
        let [header, hints] = chat_modal_header_and_hints(screen);

        assert!(modal.contains(body.as_position()));
        assert_eq!(header.y + 1, body.y);
        assert_eq!(body.bottom(), hints.y);
        assert_eq!(hints.bottom() + 1, modal.bottom());
    }
}
