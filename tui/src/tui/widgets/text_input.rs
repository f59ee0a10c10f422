use crossterm::event::{
    KeyCode,
    KeyEvent,
};
use ratatui::{
    self,
    layout::Rect,
    style::Style,
    widgets::{
        Block,
        Borders,
    },
    Frame,
};
use tui_textarea::TextArea;

/// Single line input bar of the message tab.
#[derive(Debug)]
pub(crate) struct TextInput {
    editor: TextArea<'static>,
}

impl TextInput {
    pub(crate) fn new(placeholder: impl ToString, style: Style) -> Self {
        let mut editor = TextArea::default();
        editor.set_cursor_line_style(Style::default());
        editor.set_placeholder_text(placeholder.to_string());
        editor.set_block(Block::default().borders(Borders::ALL).border_style(style));
        Self { editor }
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(&self.editor, area);
    }

    /// Feeds a key to the editor. Newlines are not allowed; Enter is left to
    /// the caller.
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Tab) {
            return false;
        }
        self.editor.input(key)
    }

    /// Returns the typed text and clears the editor.
    pub(crate) fn take(&mut self) -> String {
        let text = self.editor.lines().join("\n");
        self.editor.select_all();
        self.editor.cut();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn take_returns_text_and_clears() {
        let mut input = TextInput::new("Type", Style::default());
        for c in "hi".chars() {
            assert!(press(&mut input, KeyCode::Char(c)));
        }
        assert!(!press(&mut input, KeyCode::Enter));

        assert_eq!(input.take(), "hi");
        assert_eq!(input.take(), "");
    }
}
