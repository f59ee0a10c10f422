mod button;
mod indicator;
mod text_input;

pub(crate) use button::button;
pub(crate) use indicator::{
    avatar_badge,
    indicator_spans,
};
pub(crate) use text_input::TextInput;
