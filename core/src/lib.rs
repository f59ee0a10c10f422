//! View state of the in-call chat modal: the chat/participants tab machine,
//! the per-participant media projection and the moderator commands.
//!
//! Nothing in here draws or performs side effects. Hosts render the returned
//! view models and carry out the returned [`Command`]s.

#[macro_use]
extern crate tracing;

mod command;
mod error;
mod indicator;
mod message;
mod participant;
mod projection;
mod roster;
mod row;
mod state;
mod surface;
mod track;

pub use command::{
    AnalyticsEvent,
    Command,
    DialogKind,
};
pub use error::Error;
pub use indicator::{
    IndicatorIcon,
    MediaIndicator,
    MediaIndicatorProps,
    ModeratorAction,
};
pub use message::ChatMessage;
pub use participant::{
    Participant,
    Role,
};
pub use projection::{
    project,
    ParticipantProjection,
};
pub use roster::{
    ParticipantRoster,
    RosterEntry,
    NO_PARTICIPANT_MESSAGE,
};
pub use row::{
    Avatar,
    ParticipantRow,
    AVATAR_SIZE,
};
pub use state::{
    ConferenceState,
    ConferenceStore,
};
pub use surface::{
    ChatSurface,
    ChatTab,
    Dismissal,
    ModalHeader,
    SurfaceContent,
};
pub use track::{
    MediaKind,
    Track,
    Tracks,
};
