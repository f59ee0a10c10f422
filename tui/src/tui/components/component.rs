use crate::tui::{
    keybindings::KeyBindings,
    Action,
    Event,
};
use conference_chat_config::Config;
use crossterm::event::KeyEvent;
use eyre::Result;
use ratatui::{
    layout::{
        Rect,
        Size,
    },
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

/// A piece of the screen that reacts to [`Action`]s and draws itself.
///
/// All components see every action; what they draw and which keys they get
/// depends on [`Component::is_visible`] and [`Component::is_focused`].
pub trait Component {
    /// Hands the component a sender for actions it wants to emit outside of
    /// [`Component::update`], e.g. more than one at a time.
    #[allow(unused_variables)]
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn register_config_handler(&mut self, config: Config, keybindings: KeyBindings) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn init(&mut self, area: Size) -> Result<()> {
        Ok(())
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn is_focused(&self) -> bool {
        false
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let action = match event {
            Some(Event::Key(key_event)) => self.handle_key_event(key_event)?,
            _ => None,
        };
        Ok(action)
    }

    #[allow(unused_variables)]
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    #[allow(unused_variables)]
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()>;
}
