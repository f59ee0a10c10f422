use super::{
    action::{
        Action,
        ActivateAction,
    },
    components::{
        call::CallScreen,
        chat_modal::ChatModal,
        dialog::ConfirmDialog,
        logs::Logs,
        messages::MessagePanel,
        roster::RosterPanel,
        Component,
    },
    theme::Theme,
    tui::{
        Event,
        Tui,
    },
};
use crate::tui::keybindings::{
    KeyBindings,
    Keymap,
};
use color_eyre::Result;
use conference_chat_config::{
    Args,
    Config,
};
use conference_chat_core::{
    Command,
    ConferenceState,
    ConferenceStore,
};
use crossterm::event::KeyEvent;
use ratatui::{
    prelude::Rect,
    widgets::Block,
};
use serde::{
    Deserialize,
    Serialize,
};
use strum::EnumIter;
use tokio::sync::mpsc;

pub struct App {
    config: Config,
    keybindings: KeyBindings,
    components: Vec<Box<dyn Component>>,
    should_quit: bool,
    should_suspend: bool,
    last_tick_key_events: Vec<KeyEvent>,
    global_keymap: Option<Keymap>,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum FocusedTopLevelComponent {
    #[default]
    Call,
    Messages,
    Roster,
    Dialog,
    Logs,
}

type ActionSender = mpsc::UnboundedSender<Action>;
type ActionReceiver = mpsc::UnboundedReceiver<Action>;

impl App {
    pub fn new(args: Args) -> Result<Self> {
        let save_config = args.save_config;
        let config = Config::new(args)?;
        if save_config {
            config.save()?;
        }
        let keybindings = KeyBindings::default();

        let state = match &config.conference {
            Some(path) => ConferenceState::load(path)?,
            None => ConferenceState::demo()?,
        };
        info!(participants = state.participants.len(), "Conference loaded");
        let store = ConferenceStore::from(state);

        Ok(Self {
            // Draw order, back to front.
            components: vec![
                Box::new(CallScreen::new(store.clone())),
                Box::new(ChatModal::new()),
                Box::new(MessagePanel::new(store.clone())),
                Box::new(RosterPanel::new(store.clone())),
                Box::new(ConfirmDialog::new(store)),
                Box::new(Logs::new()),
            ],
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            global_keymap: keybindings.get(&FocusedTopLevelComponent::Call).cloned(),
            config,
            keybindings,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(self.config.tick_rate)
            .frame_rate(self.config.frame_rate);
        tui.enter()?;

        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }
        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone(), self.keybindings.clone())?;
        }
        for component in self.components.iter_mut() {
            component.init(tui.size()?)?;
        }
        action_tx.send(Action::Activate(ActivateAction::Call))?;

        loop {
            self.handle_events(&mut tui, action_tx.clone()).await?;
            self.handle_actions(&mut tui, action_tx.clone(), &mut action_rx)?;
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;

        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui, action_tx: ActionSender) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };
        match event {
            Event::Error(ref message) => action_tx.send(Action::Error(message.clone()))?,
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Key(key) => self.handle_key_event(key, &action_tx)?,
        }

        for component in self.components.iter_mut() {
            if component.is_focused() {
                if let Some(action) = component.handle_events(Some(event.clone()))? {
                    action_tx.send(action)?;
                }
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent, action_tx: &ActionSender) -> Result<()> {
        let Some(keymap) = &self.global_keymap else {
            return Ok(());
        };

        match keymap.get(&vec![key]) {
            Some(action) => action_tx.send(action.clone())?,
            None => {
                // Not a single key binding; try it as part of a sequence.
                self.last_tick_key_events.push(key);
                if let Some(action) = keymap.get(&self.last_tick_key_events) {
                    action_tx.send(action.clone())?;
                }
            }
        }
        Ok(())
    }

    /// Carries out what the chat surface asked for. Dialogs are opened by the
    /// dialog component, which also sees every command.
    fn handle_command(&self, command: &Command, action_tx: &ActionSender) -> Result<()> {
        match command {
            Command::ToggleChat => action_tx.send(Action::ToggleChat)?,
            Command::Analytics(event) => {
                info!(
                    target: "analytics",
                    source = %event.source,
                    action = %event.action,
                    subject = %event.subject,
                    attributes = %serde_json::Value::Object(event.attributes.clone()),
                    "Analytics event"
                );
            }
            Command::OpenDialog { .. } => {}
        }
        Ok(())
    }

    fn handle_actions(&mut self, tui: &mut Tui, action_tx: ActionSender, action_rx: &mut ActionReceiver) -> Result<()> {
        while let Ok(action) = action_rx.try_recv() {
            if action != Action::Tick && action != Action::Render {
                trace!("{action:?}");
            }
            match &action {
                Action::Tick => self.last_tick_key_events.clear(),
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::ClearScreen => tui.terminal.clear()?,
                Action::Resize(w, h) => self.handle_resize(tui, *w, *h)?,
                Action::Render => self.render(tui)?,
                Action::Error(message) => error!("{message}"),
                Action::UpdateGlobalKeybindings(keymap) => {
                    self.global_keymap = Some(keymap.clone());
                    self.last_tick_key_events.clear();
                }
                Action::Command(command) => self.handle_command(command, &action_tx)?,
                _ => {}
            };

            for component in self.components.iter_mut() {
                if let Some(action) = component.update(action.clone())? {
                    action_tx.send(action)?
                };
            }
        }
        Ok(())
    }

    fn handle_resize(&mut self, tui: &mut Tui, w: u16, h: u16) -> Result<()> {
        tui.resize(Rect::new(0, 0, w, h))?;
        self.render(tui)
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| {
            frame.render_widget(Block::default().style(Theme::default().default), frame.area());

            for component in self.components.iter_mut() {
                if component.is_visible() {
                    if let Err(err) = component.draw(frame, frame.area()) {
                        error!("Failed to draw: {:?}", err);
                    }
                }
            }
        })?;
        Ok(())
    }
}
