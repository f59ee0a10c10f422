use crate::tui::theme::Theme;
use conference_chat_core::{
    Avatar,
    MediaIndicator,
};
use ratatui::text::Span;

/// Glyphs for a row's indicators. Pressable ones are highlighted.
pub(crate) fn indicator_spans(indicators: &[MediaIndicator], theme: &Theme) -> Vec<Span<'static>> {
    indicators
        .iter()
        .flat_map(|indicator| {
            let style = if indicator.is_interactive() {
                theme.indicator_interactive
            } else {
                theme.indicator_passive
            };
            [Span::styled(indicator.icon.glyph(), style), Span::raw(" ")]
        })
        .collect()
}

/// Terminal stand-in for the avatar picture: the initials of `name`, or of the
/// participant id when there is no name.
pub(crate) fn avatar_badge(avatar: &Avatar<'_>, name: Option<&str>) -> String {
    let source = name.map(str::trim).filter(|name| !name.is_empty()).unwrap_or(avatar.participant_id);
    let initials = source
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect::<String>();
    let picture = if avatar.url.is_some() { "◉" } else { "○" };
    format!("{picture} {initials}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_chat_core::{
        IndicatorIcon,
        ModeratorAction,
        AVATAR_SIZE,
    };

    #[test]
    fn interactive_indicators_are_highlighted() {
        let theme = Theme::default();
        let spans = indicator_spans(
            &[
                MediaIndicator {
                    icon: IndicatorIcon::Kick,
                    action: Some(ModeratorAction::Kick),
                },
                MediaIndicator::passive(IndicatorIcon::CameraDisabled),
            ],
            &theme,
        );

        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].style, theme.indicator_interactive);
        assert_eq!(spans[2].style, theme.indicator_passive);
        assert_eq!(spans[2].content, IndicatorIcon::CameraDisabled.glyph());
    }

    #[test]
    fn avatar_badge_uses_initials() {
        let avatar = Avatar {
            participant_id: "f7g8h9",
            url: None,
            size: AVATAR_SIZE,
        };
        assert_eq!(avatar_badge(&avatar, Some(" Ann Lee ")), "○ AL");
        assert_eq!(avatar_badge(&avatar, None), "○ F");
    }
}
