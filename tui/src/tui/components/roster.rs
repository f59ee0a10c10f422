use super::chat_modal::ChatAction;
use crate::tui::{
    keybindings::{
        KeyBindings,
        Keymap,
    },
    layout,
    widgets::{
        avatar_badge,
        indicator_spans,
    },
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
    ConferenceStore,
    ModeratorAction,
    ParticipantRoster,
    ParticipantRow,
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
        Cell,
        Paragraph,
        Row,
        Table,
        TableState,
    },
    Frame,
};
use strum::Display;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
pub(crate) enum RosterAction {
    MoveUp,
    MoveDown,
    /// Press the selected row's indicator carrying this action.
    Press(ModeratorAction),
    MessagePrivately,
}

/// Participants tab of the chat modal.
///
/// The table is rebuilt from the store on every draw. Only the selection
/// index survives between frames.
#[derive(Debug)]
pub struct RosterPanel {
    store: ConferenceStore,
    /// Drawn; stays set while a dialog sits on top.
    mounted: bool,
    focused: bool,
    selected: usize,
    #[debug(skip)]
    table_state: TableState,
    #[debug(skip)]
    action_tx: Option<UnboundedSender<Action>>,
    labels: Labels,
    theme: Theme,
    keymap: Keymap,
}

impl RosterPanel {
    pub fn new(store: ConferenceStore) -> Self {
        Self {
            store,
            mounted: false,
            focused: false,
            selected: 0,
            table_state: TableState::default(),
            action_tx: None,
            labels: Labels::default(),
            theme: Theme::default(),
            keymap: Keymap::default(),
        }
    }

    /// Runs `f` on the selected row, if there is one.
    fn with_selected_row<R>(&self, f: impl FnOnce(&ParticipantRow<'_>) -> R) -> Option<R> {
        self.store.read(|state| {
            let roster = ParticipantRoster::from_state(state);
            let rows = selectable_rows(&roster);
            rows.get(self.selected.min(rows.len().saturating_sub(1))).copied().map(f)
        })
    }

    fn row_count(&self) -> usize {
        self.store
            .read(|state| selectable_rows(&ParticipantRoster::from_state(state)).len())
    }

    fn move_up(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected = match self.selected.min(count - 1) {
            0 => count - 1,
            index => index - 1,
        };
    }

    fn move_down(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    fn press(&mut self, action: ModeratorAction) -> Result<()> {
        let commands = self.with_selected_row(|row| row.press(action)).unwrap_or_default();
        let Some(tx) = &self.action_tx else {
            return Ok(());
        };
        for command in commands {
            tx.send(Action::Command(command))?;
        }
        Ok(())
    }

    fn message_privately(&mut self) -> Option<Action> {
        let participant_id = self.with_selected_row(|row| row.participant_id.to_string())?;
        let local = self
            .store
            .read(|state| state.participant(&participant_id).is_some_and(|p| p.local));
        if local {
            return None;
        }
        debug!(%participant_id, "Messaging privately");
        self.store.set_private_recipient(Some(participant_id));
        Some(Action::ChatAction(ChatAction::NextTab))
    }

    fn hints(&self, moderator: bool) -> Line<'static> {
        let mut hints = vec![("↑↓", "select"), ("p", "message privately")];
        if moderator {
            hints.extend([("m", "mute"), ("k", "kick")]);
        }
        hints.push(("Esc", "close"));
        Line::from(
            hints
                .into_iter()
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

fn selectable_rows<'a, 'r>(roster: &'r ParticipantRoster<'a>) -> Vec<&'r ParticipantRow<'a>> {
    roster.entries().iter().filter_map(|entry| entry.row.as_ref()).collect()
}

impl Component for RosterPanel {
    fn is_visible(&self) -> bool {
        self.mounted
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config, keybindings: KeyBindings) -> Result<()> {
        self.labels = config.labels;
        self.keymap = keybindings
            .get(&FocusedTopLevelComponent::Roster)
            .cloned()
            .ok_or_eyre("No keymap found for Roster")?;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Activate(ActivateAction::Roster) => {
                self.mounted = true;
                self.focused = true;
                return Ok(Some(Action::UpdateGlobalKeybindings(self.keymap.clone())));
            }
            Action::Activate(ActivateAction::Dialog) => {
                self.focused = false;
            }
            Action::Activate(_) => {
                self.mounted = false;
                self.focused = false;
            }
            Action::RosterAction(action) if self.focused => match action {
                RosterAction::MoveUp => self.move_up(),
                RosterAction::MoveDown => self.move_down(),
                RosterAction::Press(action) => self.press(action)?,
                RosterAction::MessagePrivately => return Ok(self.message_privately()),
            },
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let body = layout::chat_modal_body(area);
        let [table_area, hints_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(body);

        let state = self.store.snapshot();
        let roster = ParticipantRoster::from_state(&state);

        if let ParticipantRoster::Empty { message } = &roster {
            frame.render_widget(
                Paragraph::new(self.labels.text(message)).style(self.theme.text_muted),
                table_area,
            );
            return Ok(());
        }

        let rows = selectable_rows(&roster);
        self.selected = self.selected.min(rows.len().saturating_sub(1));

        let table_rows = rows
            .iter()
            .map(|row| {
                let participant = state.participant(row.participant_id);
                let name = row.name.as_deref().map(str::trim);
                let name_style = if participant.is_some_and(|p| p.local) {
                    self.theme.text_local
                } else {
                    self.theme.text_default
                };
                Row::new(vec![
                    Cell::from(Line::from(indicator_spans(&row.indicators, &self.theme))),
                    Cell::from(Span::styled(row.name.clone().unwrap_or_default(), name_style)),
                    Cell::from(Span::styled(avatar_badge(&row.avatar, name), self.theme.text_muted)),
                ])
                .height(1)
            })
            .collect::<Vec<_>>();

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(10), // Indicators
                Constraint::Fill(1),    // Name
                Constraint::Length(6),  // Avatar
            ],
        )
        .row_highlight_style(self.theme.row_selected)
        .column_spacing(1);

        self.table_state.select(Some(self.selected));
        frame.render_stateful_widget(table, table_area, &mut self.table_state);
        frame.render_widget(
            Paragraph::new(self.hints(state.viewer_is_moderator())),
            hints_area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_chat_core::{
        Command,
        ConferenceState,
        ConferenceStore,
        DialogKind,
        MediaKind,
        Participant,
        Role,
        Track,
        Tracks,
    };
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn store(role: Role) -> ConferenceStore {
        ConferenceStore::from(ConferenceState {
            participants: vec![
                Participant::new("me").with_name("Robin").with_role(role).local(),
                Participant::new("shared").fake(),
                Participant::new("b").with_name("Bob"),
            ],
            tracks: Tracks::from(vec![
                Track::new("me", MediaKind::Audio, false),
                Track::new("b", MediaKind::Audio, false),
            ]),
            ..Default::default()
        })
    }

    fn focused_panel(store: ConferenceStore) -> (RosterPanel, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut panel = RosterPanel::new(store);
        panel.register_action_handler(tx).unwrap();
        panel.update(Action::Activate(ActivateAction::Roster)).unwrap();
        (panel, rx)
    }

    #[test]
    fn selection_skips_fake_participants_and_wraps() {
        let (mut panel, _rx) = focused_panel(store(Role::Moderator));
        assert_eq!(panel.row_count(), 2);

        panel.update(Action::RosterAction(RosterAction::MoveDown)).unwrap();
        assert_eq!(panel.selected, 1);
        panel.update(Action::RosterAction(RosterAction::MoveDown)).unwrap();
        assert_eq!(panel.selected, 0);
        panel.update(Action::RosterAction(RosterAction::MoveUp)).unwrap();
        assert_eq!(panel.selected, 1);
    }

    #[test]
    fn moderator_mute_emits_analytics_then_dialog() {
        let (mut panel, mut rx) = focused_panel(store(Role::Moderator));
        panel.update(Action::RosterAction(RosterAction::MoveDown)).unwrap();
        panel
            .update(Action::RosterAction(RosterAction::Press(ModeratorAction::Mute)))
            .unwrap();

        let Ok(Action::Command(Command::Analytics(event))) = rx.try_recv() else {
            panic!("expected an analytics command first");
        };
        assert_eq!(event.subject, "mute.button");
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::Command(Command::open_dialog(DialogKind::MuteRemoteParticipant, "b"))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn non_moderator_press_does_nothing() {
        let (mut panel, mut rx) = focused_panel(store(Role::Participant));
        panel.update(Action::RosterAction(RosterAction::MoveDown)).unwrap();
        panel
            .update(Action::RosterAction(RosterAction::Press(ModeratorAction::Kick)))
            .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn private_message_switches_to_chat_tab() {
        let store = store(Role::Participant);
        let (mut panel, _rx) = focused_panel(store.clone());

        assert_eq!(
            panel.update(Action::RosterAction(RosterAction::MessagePrivately)).unwrap(),
            None,
            "the local participant is not a recipient"
        );

        panel.update(Action::RosterAction(RosterAction::MoveDown)).unwrap();
        assert_eq!(
            panel.update(Action::RosterAction(RosterAction::MessagePrivately)).unwrap(),
            Some(Action::ChatAction(ChatAction::NextTab))
        );
        assert_eq!(store.snapshot().private_recipient.as_deref(), Some("b"));
    }

    #[test]
    fn dialog_keeps_roster_mounted() {
        let (mut panel, _rx) = focused_panel(store(Role::Moderator));
        panel.update(Action::Activate(ActivateAction::Dialog)).unwrap();
        assert!(panel.is_visible());
        assert!(!panel.is_focused());

        panel.update(Action::Activate(ActivateAction::Messages)).unwrap();
        assert!(!panel.is_visible());
    }
}
