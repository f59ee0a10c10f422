use super::{
    action::Action,
    app::FocusedTopLevelComponent,
    components::{
        chat_modal::ChatAction,
        dialog::DialogAction,
        messages::MessagesAction,
        roster::RosterAction,
    },
    ActivateAction,
};
use conference_chat_core::ModeratorAction;
use crossterm::event::{
    KeyCode,
    KeyEvent,
    KeyModifiers,
};
use derive_more::{
    Deref,
    DerefMut,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;

/// Key sequences to actions for one focused view.
#[derive(Clone, Debug, Default, Deref, DerefMut, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap(pub HashMap<Vec<KeyEvent>, Action>);

#[derive(Clone, Debug, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<FocusedTopLevelComponent, Keymap>);

fn key(code: KeyCode) -> Vec<KeyEvent> {
    vec![KeyEvent::new(code, KeyModifiers::NONE)]
}

fn letter(c: char) -> Vec<KeyEvent> {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> Vec<KeyEvent> {
    vec![KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)]
}

impl Default for KeyBindings {
    fn default() -> Self {
        let call = Keymap(HashMap::from_iter([
            (letter('q'), Action::Quit),
            (ctrl('c'), Action::Quit),
            (ctrl('z'), Action::Suspend),
            (letter('c'), Action::ToggleChat),
            (letter('m'), Action::ToggleLocalAudio),
            (letter('v'), Action::ToggleLocalVideo),
            (letter('h'), Action::ToggleRaisedHand),
            (letter('l'), Action::Activate(ActivateAction::Logs)),
        ]));

        // Printable keys belong to the input bar here.
        let messages = Keymap(HashMap::from_iter([
            (ctrl('c'), Action::Quit),
            (key(KeyCode::Esc), Action::ChatAction(ChatAction::Close)),
            (key(KeyCode::Tab), Action::ChatAction(ChatAction::NextTab)),
            (ctrl('r'), Action::MessagesAction(MessagesAction::ClearRecipient)),
        ]));

        let roster = Keymap(HashMap::from_iter([
            (letter('q'), Action::Quit),
            (ctrl('c'), Action::Quit),
            (key(KeyCode::Esc), Action::ChatAction(ChatAction::Close)),
            (key(KeyCode::Tab), Action::ChatAction(ChatAction::NextTab)),
            (key(KeyCode::Up), Action::RosterAction(RosterAction::MoveUp)),
            (key(KeyCode::Down), Action::RosterAction(RosterAction::MoveDown)),
            (letter('k'), Action::RosterAction(RosterAction::Press(ModeratorAction::Kick))),
            (letter('m'), Action::RosterAction(RosterAction::Press(ModeratorAction::Mute))),
            (letter('p'), Action::RosterAction(RosterAction::MessagePrivately)),
        ]));

        let dialog = Keymap(HashMap::from_iter([
            (ctrl('c'), Action::Quit),
            (letter('y'), Action::DialogAction(DialogAction::Confirm)),
            (key(KeyCode::Enter), Action::DialogAction(DialogAction::Confirm)),
            (letter('n'), Action::DialogAction(DialogAction::Cancel)),
            (key(KeyCode::Esc), Action::DialogAction(DialogAction::Cancel)),
        ]));

        let logs = Keymap(HashMap::from_iter([
            (letter('q'), Action::Quit),
            (ctrl('c'), Action::Quit),
            (letter('l'), Action::Activate(ActivateAction::Call)),
        ]));

        Self(HashMap::from_iter([
            (FocusedTopLevelComponent::Call, call),
            (FocusedTopLevelComponent::Messages, messages),
            (FocusedTopLevelComponent::Roster, roster),
            (FocusedTopLevelComponent::Dialog, dialog),
            (FocusedTopLevelComponent::Logs, logs),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn every_focus_has_a_way_out() {
        let bindings = KeyBindings::default();
        for focus in FocusedTopLevelComponent::iter() {
            let keymap = bindings.get(&focus).unwrap();
            assert_eq!(keymap.get(&ctrl('c')), Some(&Action::Quit), "{focus:?}");
        }
    }

    #[test]
    fn message_input_keeps_printable_keys() {
        let bindings = KeyBindings::default();
        let keymap = bindings.get(&FocusedTopLevelComponent::Messages).unwrap();
        assert!(keymap
            .keys()
            .flatten()
            .all(|key| !matches!(key.code, KeyCode::Char(_)) || key.modifiers == KeyModifiers::CONTROL));
    }
}
