use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;
use strum::{
    Display,
    EnumIter,
    EnumString,
};

#[derive(Debug, Clone, Copy, Display, EnumIter, EnumString, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// A published media stream of one participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    pub participant_id: String,
    pub kind: MediaKind,
    #[serde(default)]
    pub muted: bool,
}

impl Track {
    pub fn new(participant_id: impl ToString, kind: MediaKind, muted: bool) -> Self {
        Self {
            participant_id: participant_id.to_string(),
            kind,
            muted,
        }
    }
}

/// Tracks indexed by participant id, one slot per media kind.
///
/// Serialized as a plain list. When a list holds more than one track for the
/// same `(kind, participant id)` the first one wins, matching a front-to-back
/// lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Track>", into = "Vec<Track>")]
pub struct Tracks {
    by_participant: HashMap<String, MediaTracks>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct MediaTracks {
    audio: Option<Track>,
    video: Option<Track>,
}

impl MediaTracks {
    fn slot(&self, kind: MediaKind) -> &Option<Track> {
        match kind {
            MediaKind::Audio => &self.audio,
            MediaKind::Video => &self.video,
        }
    }

    fn slot_mut(&mut self, kind: MediaKind) -> &mut Option<Track> {
        match kind {
            MediaKind::Audio => &mut self.audio,
            MediaKind::Video => &mut self.video,
        }
    }
}

impl Tracks {
    pub fn get(&self, kind: MediaKind, participant_id: &str) -> Option<&Track> {
        self.by_participant.get(participant_id)?.slot(kind).as_ref()
    }

    pub fn get_mut(&mut self, kind: MediaKind, participant_id: &str) -> Option<&mut Track> {
        self.by_participant.get_mut(participant_id)?.slot_mut(kind).as_mut()
    }

    /// Mute state of a participant's media. A participant without a track for
    /// `kind` counts as muted.
    pub fn is_muted(&self, kind: MediaKind, participant_id: &str) -> bool {
        self.get(kind, participant_id).is_none_or(|track| track.muted)
    }

    /// Inserts or replaces the track for its `(kind, participant id)`.
    pub fn insert(&mut self, track: Track) -> Option<Track> {
        self.by_participant
            .entry(track.participant_id.clone())
            .or_default()
            .slot_mut(track.kind)
            .replace(track)
    }

    pub fn remove_participant(&mut self, participant_id: &str) {
        self.by_participant.remove(participant_id);
    }

    pub fn len(&self) -> usize {
        self.by_participant
            .values()
            .map(|tracks| tracks.audio.is_some() as usize + tracks.video.is_some() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Track>> for Tracks {
    fn from(tracks: Vec<Track>) -> Self {
        let mut by_participant = HashMap::<String, MediaTracks>::new();
        for track in tracks {
            let slot = by_participant
                .entry(track.participant_id.clone())
                .or_default()
                .slot_mut(track.kind);
            if slot.is_none() {
                *slot = Some(track);
            }
        }
        Self { by_participant }
    }
}

impl From<Tracks> for Vec<Track> {
    fn from(tracks: Tracks) -> Self {
        let mut by_participant = tracks.by_participant.into_iter().collect::<Vec<_>>();
        by_participant.sort_by(|(a, _), (b, _)| a.cmp(b));
        by_participant
            .into_iter()
            .flat_map(|(_, tracks)| tracks.audio.into_iter().chain(tracks.video))
            .collect()
    }
}

impl FromIterator<Track> for Tracks {
    fn from_iter<T: IntoIterator<Item = Track>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_track_counts_as_muted() {
        let tracks = Tracks::from(vec![Track::new("b", MediaKind::Audio, false)]);

        assert!(!tracks.is_muted(MediaKind::Audio, "b"));
        assert!(tracks.is_muted(MediaKind::Video, "b"));
        assert!(tracks.is_muted(MediaKind::Audio, "c"));
    }

    #[test]
    fn first_track_for_a_key_wins() {
        let tracks = Tracks::from(vec![
            Track::new("a", MediaKind::Audio, false),
            Track::new("a", MediaKind::Audio, true),
        ]);

        assert_eq!(tracks.len(), 1);
        assert!(!tracks.is_muted(MediaKind::Audio, "a"));
    }

    #[test]
    fn deserializes_from_list() {
        let tracks: Tracks = serde_yml::from_str(
            "- participant_id: a\n  kind: audio\n  muted: true\n- participant_id: a\n  kind: video\n",
        )
        .unwrap();

        assert!(tracks.is_muted(MediaKind::Audio, "a"));
        assert!(!tracks.is_muted(MediaKind::Video, "a"));
    }
}
