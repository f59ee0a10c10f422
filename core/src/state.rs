use crate::{
    message::ChatMessage,
    participant::Participant,
    track::{
        MediaKind,
        Track,
        Tracks,
    },
};
use eyre::{
    Context as _,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    path::Path,
    sync::{
        Arc,
        Mutex,
        MutexGuard,
        PoisonError,
    },
};

const DEMO_CONFERENCE: &str = include_str!("demo-conference.yaml");

/// Everything the chat surface reads about the running conference.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceState {
    /// In join order.
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub tracks: Tracks,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Participant id that new messages are privately addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_recipient: Option<String>,
}

impl ConferenceState {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yml::from_str(content).context("Failed to parse conference snapshot")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read conference snapshot {:?}", path))?;
        Self::from_yaml(&content).wrap_err_with(|| format!("Invalid conference snapshot {:?}", path))
    }

    pub fn demo() -> Result<Self> {
        Self::from_yaml(DEMO_CONFERENCE)
    }

    pub fn local_participant(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.local)
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    fn participant_mut(&mut self, id: &str) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    /// Whether the viewing (local) user holds the moderator role.
    pub fn viewer_is_moderator(&self) -> bool {
        self.local_participant().is_some_and(Participant::is_moderator)
    }

    pub fn private_recipient(&self) -> Option<&Participant> {
        self.private_recipient.as_deref().and_then(|id| self.participant(id))
    }
}

/// Shared handle on the conference state. Signaling updates and the UI both
/// go through it; the chat surface only ever reads.
#[derive(Debug, Clone, Default)]
pub struct ConferenceStore {
    inner: Arc<Mutex<ConferenceState>>,
}

impl From<ConferenceState> for ConferenceStore {
    fn from(state: ConferenceState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }
}

impl ConferenceStore {
    fn lock(&self) -> MutexGuard<'_, ConferenceState> {
        // The state stays consistent across a panicking reader.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the current state.
    pub fn read<R>(&self, f: impl FnOnce(&ConferenceState) -> R) -> R {
        f(&self.lock())
    }

    pub fn snapshot(&self) -> ConferenceState {
        self.lock().clone()
    }

    pub fn participant_count(&self) -> usize {
        self.lock().participants.iter().filter(|p| !p.fake_participant).count()
    }

    pub fn send_message(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let mut state = self.lock();
        let Some(local) = state.local_participant() else {
            warn!("Cannot send a message without a local participant");
            return;
        };
        let mut message = ChatMessage::new(&local.id, text);
        message.sender_name = local.name.clone();
        message.local = true;
        message.recipient_id = state.private_recipient.clone();
        debug!(private = message.is_private(), "Sending chat message");
        state.messages.push(message);
    }

    pub fn set_private_recipient(&self, participant_id: Option<String>) {
        self.lock().private_recipient = participant_id;
    }

    /// Mutes the audio track of a remote participant, as a moderator would.
    pub fn mute_remote_audio(&self, participant_id: &str) {
        let mut state = self.lock();
        match state.tracks.get_mut(MediaKind::Audio, participant_id) {
            Some(track) => {
                track.muted = true;
                info!(%participant_id, "Muted remote participant");
            }
            None => debug!(%participant_id, "No audio track to mute"),
        }
    }

    /// Removes a participant and their tracks from the conference.
    pub fn kick(&self, participant_id: &str) -> Option<Participant> {
        let mut state = self.lock();
        let index = state.participants.iter().position(|p| p.id == participant_id)?;
        let participant = state.participants.remove(index);
        state.tracks.remove_participant(participant_id);
        if state.private_recipient.as_deref() == Some(participant_id) {
            state.private_recipient = None;
        }
        info!(%participant_id, "Kicked participant");
        Some(participant)
    }

    pub fn toggle_local_audio(&self) {
        self.toggle_local_track(MediaKind::Audio);
    }

    pub fn toggle_local_video(&self) {
        self.toggle_local_track(MediaKind::Video);
    }

    fn toggle_local_track(&self, kind: MediaKind) {
        let mut state = self.lock();
        let Some(local_id) = state.local_participant().map(|p| p.id.clone()) else {
            return;
        };
        let muted = match state.tracks.get_mut(kind, &local_id) {
            Some(track) => {
                track.muted = !track.muted;
                track.muted
            }
            None => {
                state.tracks.insert(Track::new(&local_id, kind, false));
                false
            }
        };
        debug!(%kind, muted, "Toggled local track");
    }

    pub fn toggle_raised_hand(&self) {
        let mut state = self.lock();
        let Some(local_id) = state.local_participant().map(|p| p.id.clone()) else {
            return;
        };
        if let Some(local) = state.participant_mut(&local_id) {
            local.raised_hand = !local.raised_hand;
            debug!(raised_hand = local.raised_hand, "Toggled raised hand");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::Role;
    use pretty_assertions::assert_eq;

    fn store() -> ConferenceStore {
        ConferenceStore::from(ConferenceState {
            participants: vec![
                Participant::new("me").with_name("Me").with_role(Role::Moderator).local(),
                Participant::new("b").with_name("Bob"),
            ],
            tracks: Tracks::from(vec![Track::new("b", MediaKind::Audio, false)]),
            ..Default::default()
        })
    }

    #[test]
    fn demo_conference_parses() {
        let state = ConferenceState::demo().unwrap();
        assert!(state.local_participant().is_some());
        assert!(!state.participants.is_empty());
    }

    #[test]
    fn viewer_is_moderator_follows_local_role() {
        let store = store();
        assert!(store.read(ConferenceState::viewer_is_moderator));

        let state = ConferenceState {
            participants: vec![Participant::new("b").with_role(Role::Moderator)],
            ..Default::default()
        };
        assert!(!state.viewer_is_moderator());
    }

    #[test]
    fn mute_and_kick_remote_participant() {
        let store = store();
        store.set_private_recipient(Some("b".to_string()));

        store.mute_remote_audio("b");
        assert!(store.read(|s| s.tracks.is_muted(MediaKind::Audio, "b")));

        let kicked = store.kick("b").unwrap();
        assert_eq!(kicked.id, "b");
        let state = store.snapshot();
        assert_eq!(state.participants.len(), 1);
        assert!(state.tracks.get(MediaKind::Audio, "b").is_none());
        assert_eq!(state.private_recipient, None);
        assert!(store.kick("b").is_none());
    }

    #[test]
    fn muting_without_audio_track_changes_nothing() {
        let store = store();
        let before = store.snapshot();

        store.mute_remote_audio("me");
        assert_eq!(store.snapshot(), before);
        assert!(store.read(|s| s.tracks.get(MediaKind::Audio, "me").is_none()));
    }

    #[test]
    fn send_message_uses_local_participant_and_recipient() {
        let store = store();
        store.send_message("   ");
        assert!(store.snapshot().messages.is_empty());

        store.set_private_recipient(Some("b".to_string()));
        store.send_message(" hello ");
        let messages = store.snapshot().messages;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[0].sender_id, "me");
        assert_eq!(messages[0].recipient_id.as_deref(), Some("b"));
        assert!(messages[0].local);
    }

    #[test]
    fn toggling_local_media_creates_missing_tracks() {
        let store = store();
        store.toggle_local_video();
        assert!(!store.read(|s| s.tracks.is_muted(MediaKind::Video, "me")));
        store.toggle_local_video();
        assert!(store.read(|s| s.tracks.is_muted(MediaKind::Video, "me")));

        store.toggle_raised_hand();
        assert!(store.read(|s| s.participant("me").unwrap().raised_hand));
    }
}
