//! Outbound requests from the chat surface to its host.
//!
//! Components never open dialogs or submit analytics themselves; they return
//! [`Command`] values and the host decides how to carry them out. Commands are
//! fire-and-forget: nothing is reported back.

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};
use strum::Display;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogKind {
    MuteRemoteParticipant,
    KickRemoteParticipant,
}

impl DialogKind {
    pub fn title_label(&self) -> &'static str {
        match self {
            DialogKind::MuteRemoteParticipant => "dialog.muteParticipantTitle",
            DialogKind::KickRemoteParticipant => "dialog.kickTitle",
        }
    }

    pub fn body_label(&self) -> &'static str {
        match self {
            DialogKind::MuteRemoteParticipant => "dialog.muteParticipantBody",
            DialogKind::KickRemoteParticipant => "dialog.kickMessage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub source: String,
    pub action: String,
    pub subject: String,
    pub attributes: Map<String, Value>,
}

impl AnalyticsEvent {
    pub const REMOTE_VIDEO_MENU: &'static str = "remote.video.menu";

    /// A click on one of the buttons acting on a remote participant.
    pub fn remote_video_menu_button(button: &str, participant_id: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert("participant_id".to_string(), Value::from(participant_id));
        Self {
            source: Self::REMOTE_VIDEO_MENU.to_string(),
            action: "clicked".to_string(),
            subject: button.to_string(),
            attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Ask the host to show a confirmation dialog about `participant_id`.
    OpenDialog { kind: DialogKind, participant_id: String },
    /// Ask the host to hide (or show) the chat modal.
    ToggleChat,
    Analytics(AnalyticsEvent),
}

impl Command {
    pub fn open_dialog(kind: DialogKind, participant_id: impl ToString) -> Self {
        Command::OpenDialog {
            kind,
            participant_id: participant_id.to_string(),
        }
    }
}
