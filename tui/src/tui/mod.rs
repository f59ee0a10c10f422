mod action;
mod app;
mod components;
mod keybindings;
mod layout;
mod theme;
#[allow(clippy::module_inception)]
mod tui;
mod widgets;

pub(crate) use action::Action;
use action::ActivateAction;
pub use app::App;
pub(crate) use app::FocusedTopLevelComponent;
use components::Component;
use theme::Theme;
use tui::Event;
pub use tui::Tui;
