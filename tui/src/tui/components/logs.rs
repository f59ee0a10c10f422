use crate::tui::{
    keybindings::{
        KeyBindings,
        Keymap,
    },
    layout::header_and_main_area,
    Action,
    ActivateAction,
    Component,
    FocusedTopLevelComponent,
    Theme,
};
use color_eyre::Result;
use conference_chat_config::Config;
use crossterm::event::{
    KeyCode,
    KeyEvent,
};
use derive_more::Debug;
use eyre::OptionExt as _;
use ratatui::{
    layout::Rect,
    style::{
        Color,
        Style,
    },
    text::{
        Line,
        Span,
    },
    widgets::{
        Paragraph,
        Widget as _,
    },
    Frame,
};
use strum::Display;
use tui_logger::{
    LevelFilter,
    TuiLoggerLevelOutput,
    TuiLoggerSmartWidget,
    TuiWidgetEvent,
    TuiWidgetState,
};

const ANALYTICS_TARGET: &str = "analytics";

/// Which records the log view lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
enum LogFilter {
    #[default]
    #[strum(to_string = "all")]
    All,
    /// Only the commands the chat surface reported for analytics.
    #[strum(to_string = "analytics only")]
    Analytics,
}

impl LogFilter {
    fn toggled(self) -> Self {
        match self {
            LogFilter::All => LogFilter::Analytics,
            LogFilter::Analytics => LogFilter::All,
        }
    }

    fn widget_state(self) -> TuiWidgetState {
        let default = match self {
            LogFilter::All => LevelFilter::Debug,
            LogFilter::Analytics => LevelFilter::Off,
        };
        TuiWidgetState::new()
            .set_default_display_level(default)
            .set_level_for_target(ANALYTICS_TARGET, LevelFilter::Info)
    }
}

/// Full screen log view. `a` narrows it down to analytics events.
#[derive(Debug)]
pub struct Logs {
    active: bool,
    filter: LogFilter,
    #[debug(skip)]
    state: TuiWidgetState,
    keymap: Keymap,
    theme: Theme,
}

impl Logs {
    pub fn new() -> Self {
        let filter = LogFilter::default();
        Self {
            active: false,
            filter,
            state: filter.widget_state(),
            keymap: Keymap::default(),
            theme: Theme::default(),
        }
    }

    fn toggle_filter(&mut self) {
        self.filter = self.filter.toggled();
        self.state = self.filter.widget_state();
        debug!(filter = %self.filter, "Log filter changed");
    }
}

impl Component for Logs {
    fn is_visible(&self) -> bool {
        self.active
    }

    fn is_focused(&self) -> bool {
        self.active
    }

    fn register_config_handler(&mut self, _config: Config, keybindings: KeyBindings) -> Result<()> {
        self.keymap = keybindings
            .get(&FocusedTopLevelComponent::Logs)
            .cloned()
            .ok_or_eyre("No keymap found for Logs")?;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Activate(ActivateAction::Logs) => {
                self.active = true;
                return Ok(Some(Action::UpdateGlobalKeybindings(self.keymap.clone())));
            }
            Action::Activate(_) => self.active = false,
            _ => {}
        }
        Ok(None)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let event = match key.code {
            KeyCode::Char('a') => {
                self.toggle_filter();
                return Ok(None);
            }
            KeyCode::Char(' ') => TuiWidgetEvent::SpaceKey,
            KeyCode::Esc => TuiWidgetEvent::EscapeKey,
            KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
            KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
            KeyCode::Up => TuiWidgetEvent::UpKey,
            KeyCode::Down => TuiWidgetEvent::DownKey,
            KeyCode::Left => TuiWidgetEvent::LeftKey,
            KeyCode::Right => TuiWidgetEvent::RightKey,
            KeyCode::Char('+') => TuiWidgetEvent::PlusKey,
            KeyCode::Char('-') => TuiWidgetEvent::MinusKey,
            KeyCode::Char('h') => TuiWidgetEvent::HideKey,
            KeyCode::Char('f') => TuiWidgetEvent::FocusKey,
            _ => return Ok(None),
        };
        self.state.transition(event);
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [header_area, area] = header_and_main_area(area)?;

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("Logs ({})  ", self.filter), self.theme.text_default),
                Span::styled("[a] analytics  [l] back to the call", self.theme.border_focused),
            ])),
            header_area,
        );

        TuiLoggerSmartWidget::default()
            .style_error(Style::default().fg(Color::Red))
            .style_warn(Style::default().fg(Color::Yellow))
            .style_info(Style::default().fg(Color::Cyan))
            .style_debug(Style::default().fg(Color::Green))
            .style_trace(Style::default().fg(Color::Magenta))
            .output_separator(':')
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(true)
            .output_file(false)
            .output_line(false)
            .state(&self.state)
            .render(area, frame.buffer_mut());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activates_only_for_logs() {
        let mut logs = Logs::new();
        logs.register_config_handler(Config::default(), KeyBindings::default())
            .unwrap();

        let action = logs.update(Action::Activate(ActivateAction::Logs)).unwrap();
        assert!(matches!(action, Some(Action::UpdateGlobalKeybindings(_))));
        assert!(logs.is_visible());

        logs.update(Action::Activate(ActivateAction::Call)).unwrap();
        assert!(!logs.is_visible());
    }

    #[test]
    fn a_switches_to_analytics_and_back() {
        let mut logs = Logs::new();
        let press = KeyEvent::new(KeyCode::Char('a'), crossterm::event::KeyModifiers::NONE);

        logs.handle_key_event(press).unwrap();
        assert_eq!(logs.filter, LogFilter::Analytics);
        assert_eq!(logs.filter.to_string(), "analytics only");

        logs.handle_key_event(press).unwrap();
        assert_eq!(logs.filter, LogFilter::All);
    }
}
