//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod quotes;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{classify, handle_message, size_verdict, Request, SizeVerdict};
