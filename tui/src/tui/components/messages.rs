use crate::tui::{
    keybindings::{
        KeyBindings,
        Keymap,
    },
    layout,
    widgets::TextInput,
    Action,
    ActivateAction,
    Component,
    FocusedTopLevelComponent,
    Theme,
};
use color_eyre::Result;
use conference_chat_config::{
    Config,
    Labels,
};
use conference_chat_core::{
    ChatMessage,
    ConferenceState,
    ConferenceStore,
};
use crossterm::event::{
    KeyCode,
    KeyEvent,
};
use derive_more::Debug;
use eyre::OptionExt as _;
use ratatui::{
    layout::{
        Constraint,
        Layout,
        Rect,
    },
    text::{
        Line,
        Span,
    },
    widgets::{
        List,
        ListItem,
        ListState,
        Paragraph,
    },
    Frame,
};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
pub(crate) enum MessagesAction {
    /// Go back to messaging everyone.
    ClearRecipient,
}

/// Message tab of the chat modal: the history plus the input bar.
#[derive(Debug)]
pub struct MessagePanel {
    store: ConferenceStore,
    active: bool,
    labels: Labels,
    theme: Theme,
    keymap: Keymap,
    #[debug(skip)]
    input: Option<TextInput>,
}

impl MessagePanel {
    pub fn new(store: ConferenceStore) -> Self {
        Self {
            store,
            active: false,
            labels: Labels::default(),
            theme: Theme::default(),
            keymap: Keymap::default(),
            input: None,
        }
    }

    fn input(&mut self) -> &mut TextInput {
        let placeholder = self.labels.text("chat.fieldPlaceHolder").to_string();
        let style = self.theme.border(true);
        self.input.get_or_insert_with(|| TextInput::new(placeholder, style))
    }

    fn submit(&mut self) {
        let text = self.input().take();
        self.store.send_message(&text);
    }

    fn message_line<'a>(&self, state: &'a ConferenceState, message: &'a ChatMessage) -> Line<'a> {
        let sender = message
            .sender_name
            .as_deref()
            .or_else(|| state.participant(&message.sender_id).and_then(|p| p.display_name()))
            .unwrap_or(&message.sender_id);
        let style = if message.local {
            self.theme.text_local
        } else {
            self.theme.text_default
        };

        let mut spans = vec![
            Span::styled(message.timestamp.format("%H:%M ").to_string(), self.theme.text_muted),
            Span::styled(format!("{sender}: "), style),
        ];
        if let Some(recipient_id) = &message.recipient_id {
            let recipient = state
                .participant(recipient_id)
                .and_then(|p| p.display_name())
                .unwrap_or(recipient_id);
            spans.push(Span::styled(format!("(to {recipient}) "), self.theme.text_selected));
        }
        spans.push(Span::raw(message.text.as_str()));
        Line::from(spans)
    }
}

impl Component for MessagePanel {
    fn is_visible(&self) -> bool {
        self.active
    }

    fn is_focused(&self) -> bool {
        self.active
    }

    fn register_config_handler(&mut self, config: Config, keybindings: KeyBindings) -> Result<()> {
        self.labels = config.labels;
        self.keymap = keybindings
            .get(&FocusedTopLevelComponent::Messages)
            .cloned()
            .ok_or_eyre("No keymap found for Messages")?;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Activate(ActivateAction::Messages) => {
                self.active = true;
                return Ok(Some(Action::UpdateGlobalKeybindings(self.keymap.clone())));
            }
            Action::Activate(_) => {
                self.active = false;
            }
            Action::MessagesAction(MessagesAction::ClearRecipient) => {
                self.store.set_private_recipient(None);
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Enter {
            self.submit();
        } else {
            self.input().handle_key_event(key);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let body = layout::chat_modal_body(area);
        let [history_area, recipient_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(3)]).areas(body);

        let state = self.store.snapshot();
        let items = state
            .messages
            .iter()
            .map(|message| ListItem::new(self.message_line(&state, message)))
            .collect::<Vec<_>>();
        // Keep the newest message in view.
        let mut list_state = ListState::default().with_selected(items.len().checked_sub(1));
        frame.render_stateful_widget(List::new(items), history_area, &mut list_state);

        if let Some(recipient) = state.private_recipient() {
            let name = recipient.display_name().unwrap_or(&recipient.id);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        self.labels.format("chat.messageTo", &[("recipient", name)]),
                        self.theme.text_selected,
                    ),
                    Span::styled("  [Ctrl-r] everyone", self.theme.border_unfocused),
                ])),
                recipient_area,
            );
        }

        self.input().draw(frame, input_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_chat_core::{
        Participant,
        Role,
    };
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn store() -> ConferenceStore {
        ConferenceStore::from(ConferenceState {
            participants: vec![
                Participant::new("me").with_name("Robin").with_role(Role::Moderator).local(),
                Participant::new("a").with_name("Ann"),
            ],
            ..Default::default()
        })
    }

    fn type_text(panel: &mut MessagePanel, text: &str) {
        for c in text.chars() {
            panel
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
    }

    #[test]
    fn activation_hands_over_keymap() {
        let mut panel = MessagePanel::new(store());
        panel
            .register_config_handler(Config::default(), KeyBindings::default())
            .unwrap();

        let action = panel.update(Action::Activate(ActivateAction::Messages)).unwrap();
        assert!(matches!(action, Some(Action::UpdateGlobalKeybindings(_))));
        assert!(panel.is_focused());

        panel.update(Action::Activate(ActivateAction::Roster)).unwrap();
        assert!(!panel.is_focused());
    }

    #[test]
    fn enter_sends_typed_message() {
        let store = store();
        let mut panel = MessagePanel::new(store.clone());
        type_text(&mut panel, "hello");
        panel
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();

        let messages = store.snapshot().messages;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "hello");
        assert!(messages[0].local);
    }

    #[test]
    fn clear_recipient_goes_back_to_everyone() {
        let store = store();
        store.set_private_recipient(Some("a".to_string()));
        let mut panel = MessagePanel::new(store.clone());

        panel
            .update(Action::MessagesAction(MessagesAction::ClearRecipient))
            .unwrap();
        assert_eq!(store.snapshot().private_recipient, None);
    }
}
