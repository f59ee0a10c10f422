use crate::tui::{
    keybindings::{
        KeyBindings,
        Keymap,
    },
    layout::header_and_main_area,
    widgets::indicator_spans,
    Action,
    ActivateAction,
    Component,
    FocusedTopLevelComponent,
    Theme,
};
use color_eyre::Result;
use conference_chat_config::Config;
use conference_chat_core::{
    ConferenceStore,
    ParticipantProjection,
    ParticipantRoster,
    ParticipantRow,
};
use eyre::OptionExt as _;
use ratatui::{
    layout::{
        Constraint,
        Layout,
        Rect,
    },
    style::Modifier,
    text::{
        Line,
        Span,
    },
    widgets::{
        Block,
        Borders,
        List,
        ListItem,
        Paragraph,
    },
    Frame,
};

const HELP: [(&str, &str); 6] = [
    ("c", "chat"),
    ("m", "microphone"),
    ("v", "camera"),
    ("h", "raise hand"),
    ("l", "logs"),
    ("q", "quit"),
];

/// The conference screen behind the chat modal. Owns the local controls.
#[derive(Debug)]
pub struct CallScreen {
    store: ConferenceStore,
    visible: bool,
    focused: bool,
    theme: Theme,
    keymap: Keymap,
}

impl CallScreen {
    pub fn new(store: ConferenceStore) -> Self {
        Self {
            store,
            visible: true,
            focused: true,
            theme: Theme::default(),
            keymap: Keymap::default(),
        }
    }

    fn status_line(&self) -> Line<'static> {
        let count = self.store.participant_count();
        self.store.read(|state| {
            let mut spans = vec![
                Span::styled("conference-chat", self.theme.text_default.add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {count} in call"), self.theme.text_muted),
            ];
            if let Some(local) = state.local_participant() {
                let name = local.display_name().unwrap_or("me").to_string();
                spans.push(Span::styled(format!("  {name} "), self.theme.text_local));
                let projection = ParticipantProjection::new(local, &state.tracks, state.viewer_is_moderator());
                if let Some(row) = ParticipantRow::render(projection) {
                    spans.extend(indicator_spans(&row.indicators, &self.theme));
                }
            }
            Line::from(spans)
        })
    }

    fn help_line(&self) -> Line<'static> {
        Line::from(
            HELP.iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(format!("[{key}] "), self.theme.border_focused),
                        Span::styled(format!("{label}  "), self.theme.border_unfocused),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    }
}

impl Component for CallScreen {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn register_config_handler(&mut self, _config: Config, keybindings: KeyBindings) -> Result<()> {
        self.keymap = keybindings
            .get(&FocusedTopLevelComponent::Call)
            .cloned()
            .ok_or_eyre("No keymap found for Call")?;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Activate(ActivateAction::Call) => {
                self.visible = true;
                self.focused = true;
                return Ok(Some(Action::UpdateGlobalKeybindings(self.keymap.clone())));
            }
            Action::Activate(ActivateAction::Logs) => {
                self.visible = false;
                self.focused = false;
            }
            Action::Activate(_) => {
                self.focused = false;
            }
            Action::ToggleLocalAudio => self.store.toggle_local_audio(),
            Action::ToggleLocalVideo => self.store.toggle_local_video(),
            Action::ToggleRaisedHand => self.store.toggle_raised_hand(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [header_area, area] = header_and_main_area(area)?;
        let [main_area, help_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(self.status_line()).block(Block::default().borders(Borders::BOTTOM)),
            header_area,
        );

        // Seen from the call screen nothing is pressable.
        let items = self.store.read(|state| {
            ParticipantRoster::render(Some(&state.participants), &state.tracks, false)
                .entries()
                .iter()
                .filter_map(|entry| entry.row.as_ref())
                .map(|row| {
                    let mut spans = indicator_spans(&row.indicators, &self.theme);
                    spans.push(Span::raw(row.name.clone().unwrap_or_else(|| row.participant_id.to_string())));
                    ListItem::new(Line::from(spans))
                })
                .collect::<Vec<_>>()
        });
        frame.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Participants ")),
            main_area,
        );
        frame.render_widget(Paragraph::new(self.help_line()), help_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_chat_core::{
        ConferenceState,
        IndicatorIcon,
        MediaKind,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn local_controls_update_store() {
        let store = ConferenceStore::from(ConferenceState::demo().unwrap());
        let local_id = store.read(|state| state.local_participant().unwrap().id.clone());
        let muted = store.read(|state| state.tracks.is_muted(MediaKind::Audio, &local_id));
        let mut call = CallScreen::new(store.clone());

        call.update(Action::ToggleLocalAudio).unwrap();
        call.update(Action::ToggleRaisedHand).unwrap();

        store.read(|state| {
            assert_eq!(state.tracks.is_muted(MediaKind::Audio, &local_id), !muted);
            assert!(state.local_participant().unwrap().raised_hand);
        });
    }

    #[test]
    fn status_line_shows_local_media_glyphs() {
        let store = ConferenceStore::from(ConferenceState::demo().unwrap());
        let call = CallScreen::new(store.clone());

        // Demo: microphone live, camera off.
        let line = call.status_line().to_string();
        assert!(line.contains(IndicatorIcon::Microphone.glyph()), "{line}");
        assert!(line.contains(IndicatorIcon::CameraDisabled.glyph()), "{line}");

        store.toggle_local_audio();
        store.toggle_raised_hand();
        let line = call.status_line().to_string();
        assert!(line.contains(IndicatorIcon::MicrophoneDisabled.glyph()), "{line}");
        assert!(line.contains(IndicatorIcon::RaisedHand.glyph()), "{line}");
    }

    #[test]
    fn logs_hide_the_call_and_chat_only_unfocuses_it() {
        let mut call = CallScreen::new(ConferenceStore::default());

        call.update(Action::Activate(ActivateAction::Messages)).unwrap();
        assert!(call.is_visible());
        assert!(!call.is_focused());

        call.update(Action::Activate(ActivateAction::Logs)).unwrap();
        assert!(!call.is_visible());

        let action = call.update(Action::Activate(ActivateAction::Call)).unwrap();
        assert!(matches!(action, Some(Action::UpdateGlobalKeybindings(_))));
        assert!(call.is_visible() && call.is_focused());
    }
}
