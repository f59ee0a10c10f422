use crate::tui::{
    keybindings::{
        KeyBindings,
        Keymap,
    },
    layout,
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
    Command,
    ConferenceStore,
    DialogKind,
};
use eyre::OptionExt as _;
use ratatui::{
    layout::{
        Alignment,
        Constraint,
        Layout,
        Margin,
        Rect,
    },
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
        Wrap,
    },
    Frame,
};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
pub(crate) enum DialogAction {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDialog {
    kind: DialogKind,
    participant_id: String,
}

/// Confirmation dialog for moderator actions on a remote participant.
///
/// Opens on [`Command::OpenDialog`] and carries out the action against the
/// store once confirmed.
#[derive(Debug)]
pub struct ConfirmDialog {
    store: ConferenceStore,
    pending: Option<PendingDialog>,
    labels: Labels,
    theme: Theme,
    keymap: Keymap,
}

impl ConfirmDialog {
    pub fn new(store: ConferenceStore) -> Self {
        Self {
            store,
            pending: None,
            labels: Labels::default(),
            theme: Theme::default(),
            keymap: Keymap::default(),
        }
    }

    fn confirm(&mut self) -> Option<Action> {
        let PendingDialog { kind, participant_id } = self.pending.take()?;
        match kind {
            DialogKind::MuteRemoteParticipant => self.store.mute_remote_audio(&participant_id),
            DialogKind::KickRemoteParticipant => {
                if self.store.kick(&participant_id).is_none() {
                    warn!(%participant_id, "Participant already left");
                }
            }
        }
        Some(Action::Activate(ActivateAction::Roster))
    }

    fn cancel(&mut self) -> Option<Action> {
        let PendingDialog { kind, participant_id } = self.pending.take()?;
        debug!(%kind, %participant_id, "Dialog cancelled");
        Some(Action::Activate(ActivateAction::Roster))
    }
}

impl Component for ConfirmDialog {
    fn is_visible(&self) -> bool {
        self.pending.is_some()
    }

    fn is_focused(&self) -> bool {
        self.pending.is_some()
    }

    fn register_config_handler(&mut self, config: Config, keybindings: KeyBindings) -> Result<()> {
        self.labels = config.labels;
        self.keymap = keybindings
            .get(&FocusedTopLevelComponent::Dialog)
            .cloned()
            .ok_or_eyre("No keymap found for Dialog")?;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let action = match action {
            Action::Command(Command::OpenDialog { kind, participant_id }) => {
                debug!(%kind, %participant_id, "Opening dialog");
                self.pending = Some(PendingDialog { kind, participant_id });
                Some(Action::Activate(ActivateAction::Dialog))
            }
            Action::Activate(ActivateAction::Dialog) => Some(Action::UpdateGlobalKeybindings(self.keymap.clone())),
            Action::Activate(_) => {
                self.pending = None;
                None
            }
            Action::DialogAction(DialogAction::Confirm) => self.confirm(),
            Action::DialogAction(DialogAction::Cancel) => self.cancel(),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let Some(PendingDialog { kind, participant_id }) = &self.pending else {
            return Ok(());
        };
        let name = self.store.read(|state| {
            state
                .participant(participant_id)
                .and_then(|p| p.display_name().map(str::to_string))
                .unwrap_or_else(|| participant_id.clone())
        });

        let popup = layout::center(area, Constraint::Percentage(50), Constraint::Length(8));
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(self.theme.border(true))
                .title(Span::styled(
                    format!(" {} ", self.labels.text(kind.title_label())),
                    self.theme.text_default.add_modifier(Modifier::BOLD),
                )),
            popup,
        );

        let [body_area, buttons_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(popup.inner(Margin::new(2, 1)));
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(name, self.theme.text_selected)),
                Line::from(self.labels.text(kind.body_label())),
            ])
            .wrap(Wrap { trim: true }),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(self.labels.text("dialog.confirm"), self.theme.border_focused),
                Span::raw("   "),
                Span::styled(self.labels.text("dialog.cancel"), self.theme.border_unfocused),
            ]))
            .alignment(Alignment::Right),
            buttons_area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_chat_core::{
        ConferenceState,
        MediaKind,
        Participant,
        Role,
        Track,
        Tracks,
    };
    use pretty_assertions::assert_eq;

    fn store() -> ConferenceStore {
        ConferenceStore::from(ConferenceState {
            participants: vec![
                Participant::new("me").with_name("Robin").with_role(Role::Moderator).local(),
                Participant::new("b").with_name("Bob"),
            ],
            tracks: Tracks::from(vec![Track::new("b", MediaKind::Audio, false)]),
            ..Default::default()
        })
    }

    fn open(dialog: &mut ConfirmDialog, kind: DialogKind) {
        let action = dialog
            .update(Action::Command(Command::open_dialog(kind, "b")))
            .unwrap();
        assert_eq!(action, Some(Action::Activate(ActivateAction::Dialog)));
        assert!(dialog.is_visible());
    }

    #[test]
    fn confirming_mute_mutes_audio() {
        let store = store();
        let mut dialog = ConfirmDialog::new(store.clone());
        open(&mut dialog, DialogKind::MuteRemoteParticipant);

        let action = dialog.update(Action::DialogAction(DialogAction::Confirm)).unwrap();
        assert_eq!(action, Some(Action::Activate(ActivateAction::Roster)));
        assert!(store.read(|state| state.tracks.is_muted(MediaKind::Audio, "b")));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn confirming_kick_removes_participant() {
        let store = store();
        let mut dialog = ConfirmDialog::new(store.clone());
        open(&mut dialog, DialogKind::KickRemoteParticipant);

        dialog.update(Action::DialogAction(DialogAction::Confirm)).unwrap();
        assert_eq!(store.snapshot().participant("b"), None);
    }

    #[test]
    fn cancel_leaves_state_alone() {
        let store = store();
        let mut dialog = ConfirmDialog::new(store.clone());
        open(&mut dialog, DialogKind::KickRemoteParticipant);

        let action = dialog.update(Action::DialogAction(DialogAction::Cancel)).unwrap();
        assert_eq!(action, Some(Action::Activate(ActivateAction::Roster)));
        assert!(store.snapshot().participant("b").is_some());
        assert!(!dialog.is_visible());
    }

    #[test]
    fn answers_without_dialog_are_ignored() {
        let mut dialog = ConfirmDialog::new(store());
        assert_eq!(dialog.update(Action::DialogAction(DialogAction::Confirm)).unwrap(), None);
    }
}
