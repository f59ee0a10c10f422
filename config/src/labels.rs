use serde::{
    Deserialize,
    Serialize,
};

/// Display text for the label keys used by the chat surface.
///
/// Keys are dotted paths (`chat.tabs.chat`) that map onto the nested tables of
/// the `labels` section in `config.yaml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub chat: ChatLabels,
    pub dialog: DialogLabels,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatLabels {
    pub tabs: TabLabels,
    pub no_participant_message: String,
    /// `{recipient}` is replaced by the recipient's display name.
    pub message_to: String,
    pub field_placeholder: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabLabels {
    pub chat: String,
    pub participants: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogLabels {
    pub mute_participant_title: String,
    pub mute_participant_body: String,
    pub kick_title: String,
    pub kick_message: String,
    pub confirm: String,
    pub cancel: String,
}

impl Labels {
    /// Looks up the text for a dotted label key. Unknown or empty entries are
    /// shown as the key itself so a missing translation stays visible.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        let text = match key {
            "chat.tabs.chat" => &self.chat.tabs.chat,
            "chat.tabs.participants" => &self.chat.tabs.participants,
            "chat.noParticipantMessage" => &self.chat.no_participant_message,
            "chat.messageTo" => &self.chat.message_to,
            "chat.fieldPlaceHolder" => &self.chat.field_placeholder,
            "dialog.muteParticipantTitle" => &self.dialog.mute_participant_title,
            "dialog.muteParticipantBody" => &self.dialog.mute_participant_body,
            "dialog.kickTitle" => &self.dialog.kick_title,
            "dialog.kickMessage" => &self.dialog.kick_message,
            "dialog.confirm" => &self.dialog.confirm,
            "dialog.cancel" => &self.dialog.cancel,
            _ => return key,
        };
        if text.is_empty() {
            key
        } else {
            text
        }
    }

    /// Like [`Labels::text`] but substitutes `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.text(key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }
}
