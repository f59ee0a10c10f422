use crate::{
    participant::Participant,
    projection::ParticipantProjection,
    row::ParticipantRow,
    state::ConferenceState,
    track::Tracks,
};

pub const NO_PARTICIPANT_MESSAGE: &str = "chat.noParticipantMessage";

/// A positioned roster slot. `row` is `None` for fake participants, which
/// keep their slot but draw nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    /// Positional key (`key_<index>`). It does not follow the participant, so
    /// rows must not carry state of their own across renders.
    pub key: String,
    pub row: Option<ParticipantRow<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRoster<'a> {
    /// Nobody to list; show the message with this label key.
    Empty { message: &'static str },
    Rows(Vec<RosterEntry<'a>>),
}

impl<'a> ParticipantRoster<'a> {
    /// Lays out `participants` in the order given.
    pub fn render(participants: Option<&'a [Participant]>, tracks: &Tracks, viewer_is_moderator: bool) -> Self {
        let participants = participants.unwrap_or_default();
        if participants.is_empty() {
            return ParticipantRoster::Empty {
                message: NO_PARTICIPANT_MESSAGE,
            };
        }

        let entries = participants
            .iter()
            .enumerate()
            .map(|(index, participant)| RosterEntry {
                key: format!("key_{index}"),
                row: ParticipantRow::render(ParticipantProjection::new(participant, tracks, viewer_is_moderator)),
            })
            .collect();

        ParticipantRoster::Rows(entries)
    }

    pub fn from_state(state: &'a ConferenceState) -> Self {
        Self::render(
            Some(&state.participants),
            &state.tracks,
            state.viewer_is_moderator(),
        )
    }

    pub fn entries(&self) -> &[RosterEntry<'a>] {
        match self {
            ParticipantRoster::Empty { .. } => &[],
            ParticipantRoster::Rows(entries) => entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
