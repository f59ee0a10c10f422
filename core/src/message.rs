use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// A chat line. The chat surface only passes these through to the message
/// view; it never looks inside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Set for private messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub local: bool,
}

impl ChatMessage {
    pub fn new(sender_id: impl ToString, text: impl ToString) -> Self {
        Self {
            sender_id: sender_id.to_string(),
            sender_name: None,
            text: text.to_string(),
            timestamp: Utc::now(),
            recipient_id: None,
            local: false,
        }
    }

    pub fn is_private(&self) -> bool {
        self.recipient_id.is_some()
    }
}
