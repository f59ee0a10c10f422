pub mod call;
pub mod chat_modal;
#[allow(clippy::module_inception)]
mod component;
pub mod dialog;
pub mod logs;
pub mod messages;
pub mod roster;

pub use component::Component;
