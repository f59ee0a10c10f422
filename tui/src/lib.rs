use conference_chat_config::Args;

#[macro_use]
extern crate tracing;

mod errors;
pub mod logging;
mod tui;

pub use errors::init_errors;
pub use tui::{
    App,
    Tui,
};

pub async fn start_tui(args: Args) -> eyre::Result<()> {
    init_errors()?;
    logging::log_init(args.debug)?;

    App::new(args)?.run().await
}
