use crate::{
    command::Command,
    error::Error,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::str::FromStr;
use strum::{
    Display,
    EnumIter,
};

/// The two views of the chat modal.
#[derive(Debug, Default, Clone, Copy, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatTab {
    #[default]
    Chat,
    Participants,
}

impl ChatTab {
    /// The other tab. Applying it twice is the identity.
    pub const fn toggled(self) -> Self {
        match self {
            ChatTab::Chat => ChatTab::Participants,
            ChatTab::Participants => ChatTab::Chat,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ChatTab::Chat => "chat.tabs.chat",
            ChatTab::Participants => "chat.tabs.participants",
        }
    }
}

impl FromStr for ChatTab {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "chat" => Ok(ChatTab::Chat),
            "participants" => Ok(ChatTab::Participants),
            other => Err(Error::UnknownTab(other.to_string())),
        }
    }
}

/// Which subtree the modal mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceContent {
    /// Message list, private recipient indicator and input bar.
    Messages,
    Roster,
}

/// Labels handed to the modal host's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalHeader {
    pub header_label: &'static str,
    pub forward_label: &'static str,
}

/// Answer to the modal host's close request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    /// `false` would veto closing; the chat surface never does.
    pub allow_close: bool,
    pub command: Command,
}

/// Tab state of one open chat modal. Created with the modal, dropped with it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatSurface {
    active_tab: ChatTab,
}

impl ChatSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ChatTab {
        self.active_tab
    }

    pub fn header_label(&self) -> &'static str {
        self.active_tab.label()
    }

    /// Label of the tab the forward button switches to.
    pub fn forward_label(&self) -> &'static str {
        self.active_tab.toggled().label()
    }

    pub fn header(&self) -> ModalHeader {
        ModalHeader {
            header_label: self.header_label(),
            forward_label: self.forward_label(),
        }
    }

    pub fn activate_next_tab(&mut self) -> ChatTab {
        self.active_tab = self.active_tab.toggled();
        debug!(tab = %self.active_tab, "Switched chat tab");
        self.active_tab
    }

    pub fn close(&self) -> Dismissal {
        Dismissal {
            allow_close: true,
            command: Command::ToggleChat,
        }
    }

    pub fn content(&self) -> SurfaceContent {
        match self.active_tab {
            ChatTab::Chat => SurfaceContent::Messages,
            ChatTab::Participants => SurfaceContent::Roster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn toggle_is_an_involution_without_fixed_points() {
        for tab in ChatTab::iter() {
            assert_eq!(tab.toggled().toggled(), tab);
            assert_ne!(tab.toggled(), tab);
        }
    }

    #[test]
    fn starts_on_chat_tab() {
        let surface = ChatSurface::new();
        assert_eq!(surface.active_tab(), ChatTab::Chat);
        assert_eq!(surface.content(), SurfaceContent::Messages);
        assert_eq!(
            surface.header(),
            ModalHeader {
                header_label: "chat.tabs.chat",
                forward_label: "chat.tabs.participants",
            }
        );
    }

    #[test]
    fn forward_label_previews_next_tab() {
        let mut surface = ChatSurface::new();
        for _ in 0..4 {
            let next = surface.forward_label();
            assert_ne!(surface.header_label(), next);
            surface.activate_next_tab();
            assert_eq!(surface.header_label(), next);
        }
    }

    #[test]
    fn participants_tab_mounts_roster() {
        let mut surface = ChatSurface::new();
        assert_eq!(surface.activate_next_tab(), ChatTab::Participants);
        assert_eq!(surface.content(), SurfaceContent::Roster);
        assert_eq!(surface.header_label(), "chat.tabs.participants");
        assert_eq!(surface.forward_label(), "chat.tabs.chat");
    }

    #[test]
    fn close_is_always_allowed_and_toggles_chat_once() {
        let mut surface = ChatSurface::new();
        for _ in 0..2 {
            let dismissal = surface.close();
            assert!(dismissal.allow_close);
            assert_eq!(dismissal.command, Command::ToggleChat);
            surface.activate_next_tab();
        }
    }

    #[test]
    fn unknown_tab_is_rejected() {
        assert_eq!("participants".parse::<ChatTab>().unwrap(), ChatTab::Participants);
        assert!(matches!("roster".parse::<ChatTab>(), Err(Error::UnknownTab(tab)) if tab == "roster"));
    }
}
