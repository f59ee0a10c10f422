use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    Display,
    EnumIter,
};

#[derive(Debug, Clone, Copy, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum IndicatorIcon {
    Kick,
    RaisedHand,
    Microphone,
    MicrophoneDisabled,
    Camera,
    CameraDisabled,
}

impl IndicatorIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            IndicatorIcon::Kick => "⏏",
            IndicatorIcon::RaisedHand => "✋",
            IndicatorIcon::Microphone => "🎤",
            IndicatorIcon::MicrophoneDisabled => "🔇",
            IndicatorIcon::Camera => "📷",
            IndicatorIcon::CameraDisabled => "🚫",
        }
    }
}

/// What a moderator can do to a remote participant from the roster.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeratorAction {
    Mute,
    Kick,
}

/// A resolved indicator: the glyph to draw and, if pressable, what pressing
/// it requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaIndicator {
    pub icon: IndicatorIcon,
    pub action: Option<ModeratorAction>,
}

impl MediaIndicator {
    pub fn passive(icon: IndicatorIcon) -> Self {
        Self { icon, action: None }
    }

    pub fn is_interactive(&self) -> bool {
        self.action.is_some()
    }

    pub fn props(icon: IndicatorIcon) -> MediaIndicatorProps {
        MediaIndicatorProps {
            icon,
            mute: None,
            moderator: false,
            on_press: None,
        }
    }
}

/// Inputs to the indicator policy, see [`MediaIndicatorProps::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaIndicatorProps {
    icon: IndicatorIcon,
    mute: Option<(bool, IndicatorIcon)>,
    moderator: bool,
    on_press: Option<ModeratorAction>,
}

impl MediaIndicatorProps {
    /// Media state: when `muted`, `mute_icon` replaces the regular icon.
    pub fn muted(mut self, muted: bool, mute_icon: IndicatorIcon) -> Self {
        self.mute = Some((muted, mute_icon));
        self
    }

    /// Whether the viewer moderates the participant this indicator belongs to.
    pub fn moderator(mut self, moderator: bool) -> Self {
        self.moderator = moderator;
        self
    }

    pub fn on_press(mut self, action: ModeratorAction) -> Self {
        self.on_press = Some(action);
        self
    }

    /// A muted indicator always shows its mute icon and is never pressable.
    /// Otherwise it is pressable only when the viewer moderates and an action
    /// is attached.
    pub fn resolve(self) -> MediaIndicator {
        if let Some((true, mute_icon)) = self.mute {
            return MediaIndicator::passive(mute_icon);
        }

        match self.on_press {
            Some(action) if self.moderator => MediaIndicator {
                icon: self.icon,
                action: Some(action),
            },
            _ => MediaIndicator::passive(self.icon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator as _;

    #[test]
    fn muted_indicator_shows_mute_icon_and_is_passive() {
        let indicator = MediaIndicator::props(IndicatorIcon::Microphone)
            .muted(true, IndicatorIcon::MicrophoneDisabled)
            .moderator(true)
            .on_press(ModeratorAction::Mute)
            .resolve();

        assert_eq!(indicator, MediaIndicator::passive(IndicatorIcon::MicrophoneDisabled));
    }

    #[test]
    fn unmuted_indicator_is_pressable_for_moderators_only() {
        let props = MediaIndicator::props(IndicatorIcon::Microphone)
            .muted(false, IndicatorIcon::MicrophoneDisabled)
            .on_press(ModeratorAction::Mute);

        assert!(props.moderator(true).resolve().is_interactive());
        assert!(!props.moderator(false).resolve().is_interactive());
        assert_eq!(props.resolve().icon, IndicatorIcon::Microphone);
    }

    #[test]
    fn indicator_without_action_is_passive() {
        let indicator = MediaIndicator::props(IndicatorIcon::Camera)
            .muted(false, IndicatorIcon::CameraDisabled)
            .moderator(true)
            .resolve();

        assert!(!indicator.is_interactive());
    }

    #[test]
    fn every_icon_has_its_own_glyph() {
        let glyphs = IndicatorIcon::iter().map(|icon| icon.glyph()).collect::<HashSet<_>>();
        assert_eq!(glyphs.len(), IndicatorIcon::iter().count());
    }
}
