use crate::{
    command::{
        AnalyticsEvent,
        Command,
        DialogKind,
    },
    indicator::{
        IndicatorIcon,
        MediaIndicator,
        ModeratorAction,
    },
    projection::ParticipantProjection,
};
use url::Url;

/// Avatar edge length in the host's layout units.
pub const AVATAR_SIZE: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar<'a> {
    pub participant_id: &'a str,
    /// `None` leaves the choice of a placeholder to the avatar renderer.
    pub url: Option<&'a Url>,
    pub size: u16,
}

/// One roster entry: indicators (in display order), name and avatar.
///
/// Rows borrow everything from the projection and keep no state of their own,
/// so a row can be rebuilt at any time from the shared state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow<'a> {
    pub participant_id: &'a str,
    pub indicators: Vec<MediaIndicator>,
    /// Padded display name, absent when the participant has none.
    pub name: Option<String>,
    pub avatar: Avatar<'a>,
}

impl<'a> ParticipantRow<'a> {
    /// Builds the row for a projection. Fake participants get no row at all.
    pub fn render(projection: ParticipantProjection<'a>) -> Option<Self> {
        let subject = projection.subject;
        if subject.fake_participant {
            return None;
        }

        let moderate = projection.can_moderate();
        let mut indicators = Vec::with_capacity(4);

        if moderate {
            indicators.push(
                MediaIndicator::props(IndicatorIcon::Kick)
                    .moderator(moderate)
                    .on_press(ModeratorAction::Kick)
                    .resolve(),
            );
        }
        if subject.raised_hand {
            indicators.push(MediaIndicator::passive(IndicatorIcon::RaisedHand));
        }
        indicators.push(
            MediaIndicator::props(IndicatorIcon::Microphone)
                .muted(projection.audio_muted, IndicatorIcon::MicrophoneDisabled)
                .moderator(moderate)
                .on_press(ModeratorAction::Mute)
                .resolve(),
        );
        indicators.push(
            MediaIndicator::props(IndicatorIcon::Camera)
                .muted(projection.video_muted, IndicatorIcon::CameraDisabled)
                .moderator(moderate)
                .resolve(),
        );

        Some(Self {
            participant_id: &subject.id,
            indicators,
            name: subject.display_name().map(|name| format!(" {name} ")),
            avatar: Avatar {
                participant_id: &subject.id,
                url: subject.avatar.as_ref(),
                size: AVATAR_SIZE,
            },
        })
    }

    /// Whether one of the indicators offers `action`.
    pub fn offers(&self, action: ModeratorAction) -> bool {
        self.indicators.iter().any(|indicator| indicator.action == Some(action))
    }

    /// Presses the indicator carrying `action`. Returns the commands for the
    /// host, or nothing when this row does not offer the action.
    pub fn press(&self, action: ModeratorAction) -> Vec<Command> {
        if !self.offers(action) {
            trace!(participant_id = %self.participant_id, %action, "Action not offered");
            return Vec::new();
        }

        match action {
            ModeratorAction::Mute => vec![
                Command::Analytics(AnalyticsEvent::remote_video_menu_button(
                    "mute.button",
                    self.participant_id,
                )),
                Command::open_dialog(DialogKind::MuteRemoteParticipant, self.participant_id),
            ],
            ModeratorAction::Kick => vec![Command::open_dialog(
                DialogKind::KickRemoteParticipant,
                self.participant_id,
            )],
        }
    }
}
