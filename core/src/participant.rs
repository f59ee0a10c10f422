use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    Display,
    EnumString,
};
use url::Url;

#[derive(Debug, Default, Clone, Copy, Display, EnumString, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Moderator,
    Participant,
    #[default]
    None,
}

/// A conference member as published by the signaling layer.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub dominant_speaker: bool,
    #[serde(default)]
    pub raised_hand: bool,
    /// Synthetic entries (e.g. shared video) that get no roster row.
    #[serde(default)]
    pub fake_participant: bool,
}

impl Participant {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn local(mut self) -> Self {
        self.local = true;
        self
    }

    pub fn fake(mut self) -> Self {
        self.fake_participant = true;
        self
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    /// The display name, if one is set and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
