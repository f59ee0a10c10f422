use crate::{
    participant::Participant,
    state::ConferenceState,
    track::{
        MediaKind,
        Tracks,
    },
};

/// What a roster row needs to know about one participant, derived fresh from
/// the shared state on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantProjection<'a> {
    pub audio_muted: bool,
    pub video_muted: bool,
    /// Moderator status of the viewing user, not of `subject`.
    pub viewer_is_moderator: bool,
    pub subject: &'a Participant,
}

impl<'a> ParticipantProjection<'a> {
    /// Projects `subject` against `tracks`. `viewer_is_moderator` is computed
    /// once per render pass by the caller.
    pub fn new(subject: &'a Participant, tracks: &Tracks, viewer_is_moderator: bool) -> Self {
        Self {
            audio_muted: tracks.is_muted(MediaKind::Audio, &subject.id),
            video_muted: tracks.is_muted(MediaKind::Video, &subject.id),
            viewer_is_moderator,
            subject,
        }
    }

    /// Whether the viewer may mute or kick `subject`. Never true for the
    /// viewer's own row.
    pub fn can_moderate(&self) -> bool {
        self.viewer_is_moderator && !self.subject.local
    }
}

/// Looks up `participant_id` and projects it. `None` if no such participant.
pub fn project<'a>(participant_id: &str, state: &'a ConferenceState) -> Option<ParticipantProjection<'a>> {
    let subject = state.participant(participant_id)?;
    Some(ParticipantProjection::new(
        subject,
        &state.tracks,
        state.viewer_is_moderator(),
    ))
}
