use super::components::{
    chat_modal,
    dialog,
    messages,
    roster,
};
use crate::tui::keybindings::Keymap;
use conference_chat_core::Command;
use serde::{
    Deserialize,
    Serialize,
};
use serde_yml::with::singleton_map_recursive;
use strum::Display;

#[derive(Display, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    UpdateGlobalKeybindings(Keymap),

    Activate(ActivateAction),

    /// Show the chat modal, or hide it if it is open.
    ToggleChat,
    ToggleLocalAudio,
    ToggleLocalVideo,
    ToggleRaisedHand,

    /// Request coming out of the chat surface, carried out by the app.
    #[serde(with = "singleton_map_recursive")]
    Command(Command),

    #[allow(clippy::enum_variant_names)]
    #[serde(with = "singleton_map_recursive")]
    #[allow(private_interfaces)]
    ChatAction(chat_modal::ChatAction),

    #[allow(clippy::enum_variant_names)]
    #[serde(with = "singleton_map_recursive")]
    #[allow(private_interfaces)]
    MessagesAction(messages::MessagesAction),

    #[allow(clippy::enum_variant_names)]
    #[serde(with = "singleton_map_recursive")]
    #[allow(private_interfaces)]
    RosterAction(roster::RosterAction),

    #[allow(clippy::enum_variant_names)]
    #[serde(with = "singleton_map_recursive")]
    #[allow(private_interfaces)]
    DialogAction(dialog::DialogAction),
}

/// Which top level view takes the keyboard.
#[derive(Display, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivateAction {
    /// The call screen behind the chat modal.
    Call,
    /// Chat modal, message tab.
    Messages,
    /// Chat modal, participants tab.
    Roster,
    /// A confirmation dialog on top of the roster.
    Dialog,
    Logs,
}
