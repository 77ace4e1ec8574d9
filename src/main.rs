use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use tubecourier::core::{config, init_logger, log_tool_configuration};
use tubecourier::telegram::{create_bot, handle_message, setup_bot_commands};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;
    log_tool_configuration();

    let bot = create_bot()?;

    // A failed command registration is inconvenient, not fatal
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    log::info!("Starting bot in long polling mode");

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
