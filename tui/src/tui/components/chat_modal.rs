use crate::tui::{
    keybindings::KeyBindings,
    layout,
    widgets::button,
    Action,
    ActivateAction,
    Component,
    Theme,
};
use color_eyre::Result;
use conference_chat_config::{
    Config,
    Labels,
};
use conference_chat_core::{
    ChatSurface,
    Dismissal,
    SurfaceContent,
};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{
        Line,
        Span,
    },
    widgets::{
        Block,
        BorderType,
        Borders,
        Clear,
        Paragraph,
    },
    Frame,
};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
pub(crate) enum ChatAction {
    /// The header's forward button.
    NextTab,
    Close,
}

/// The panel that mounts (and takes the keyboard) for the surface content.
pub(crate) fn activation(content: SurfaceContent) -> ActivateAction {
    match content {
        SurfaceContent::Messages => ActivateAction::Messages,
        SurfaceContent::Roster => ActivateAction::Roster,
    }
}

/// Modal host of the chat surface. The surface lives exactly as long as the
/// modal is open; reopening starts again on the chat tab.
#[derive(Debug, Default)]
pub struct ChatModal {
    surface: Option<ChatSurface>,
    labels: Labels,
    theme: Theme,
}

impl ChatModal {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle(&mut self) -> Action {
        match self.surface.take() {
            Some(_) => {
                debug!("Chat modal closed");
                Action::Activate(ActivateAction::Call)
            }
            None => {
                let surface = ChatSurface::new();
                debug!(tab = %surface.active_tab(), "Chat modal opened");
                let action = Action::Activate(activation(surface.content()));
                self.surface = Some(surface);
                action
            }
        }
    }
}

impl Component for ChatModal {
    fn is_visible(&self) -> bool {
        self.surface.is_some()
    }

    fn register_config_handler(&mut self, config: Config, _keybindings: KeyBindings) -> Result<()> {
        self.labels = config.labels;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ToggleChat => return Ok(Some(self.toggle())),
            Action::ChatAction(ChatAction::NextTab) => {
                if let Some(surface) = self.surface.as_mut() {
                    let tab = surface.activate_next_tab();
                    trace!(%tab, "Forward button pressed");
                    return Ok(Some(Action::Activate(activation(surface.content()))));
                }
            }
            Action::ChatAction(ChatAction::Close) => {
                if let Some(surface) = &self.surface {
                    let Dismissal { allow_close, command } = surface.close();
                    if allow_close {
                        return Ok(Some(Action::Command(command)));
                    }
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let Some(surface) = &self.surface else {
            return Ok(());
        };
        let header = surface.header();
        let modal_area = layout::chat_modal_area(area);
        let [header_area, hints_area] = layout::chat_modal_header_and_hints(area);

        frame.render_widget(Clear, modal_area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border(true))
                .title(Span::styled(
                    format!(" {} ", self.labels.text(header.header_label)),
                    self.theme.text_default.add_modifier(Modifier::BOLD),
                )),
            modal_area,
        );

        frame.render_widget(
            button("Tab", self.labels.text(header.forward_label), true, &self.theme),
            header_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Esc] ", self.theme.border_focused),
                Span::styled("close", self.theme.border_unfocused),
            ])),
            hints_area,
        );

        Ok(())
    }
}
