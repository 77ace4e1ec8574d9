//! Tubecourier — Telegram bot that downloads YouTube videos, compresses
//! them with ffmpeg and sends the result back to the requesting chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, process execution
//! - `download`: yt-dlp invocation and artifact discovery
//! - `conversion`: ffmpeg compression
//! - `telegram`: bot wiring, message classification and handlers

pub mod conversion;
pub mod core;
pub mod download;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::error::{AppError, AppResult};
pub use crate::core::types::MediaFile;
pub use crate::download::{cleanup, download_video, DownloadConfig};
pub use crate::telegram::handle_message;
