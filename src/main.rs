use clap::Parser;
use color_eyre::Result;
use conference_chat_config::Args;

#[tokio::main]
async fn main() -> Result<()> {
    conference_chat_tui::start_tui(Args::parse()).await
}
