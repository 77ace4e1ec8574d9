//! Inbound message classification and the download pipeline driver
//!
//! Classification policy, evaluated in order: exact `/start`, then the
//! YouTube URL pattern, then the unrecognized fallback. A matched URL walks
//! the whole pipeline: filler reply, download, compress, size check,
//! delivery, cleanup.

use once_cell::sync::Lazy;
use regex::Regex;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::download::{self, DownloadConfig};
use crate::telegram::quotes;

/// Cached regex for YouTube video links: optional scheme, optional www,
/// youtube.com or youtu.be host, then a non-empty path.
static YOUTUBE_URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$").expect("Failed to compile YouTube URL regex"));

/// What an inbound text message asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Start,
    Download(String),
    Unrecognized,
}

/// Classify inbound text.
pub fn classify(text: &str) -> Request {
    if text == "/start" {
        Request::Start
    } else if YOUTUBE_URL_REGEX.is_match(text) {
        Request::Download(text.to_string())
    } else {
        Request::Unrecognized
    }
}

/// Entry point for every inbound message.
///
/// No pipeline error is fatal: whatever happens inside one request, the bot
/// keeps accepting further updates.
pub async fn handle_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match classify(text) {
        Request::Start => {
            bot.send_message(msg.chat.id, quotes::GREETING).await?;
        }
        Request::Download(url) => {
            if let Err(e) = handle_download(&bot, &msg, &url).await {
                // Pipeline failures are reported to the user inside
                // handle_download; what ends up here is a delivery failure.
                // The user still gets the generic notice, best effort: if
                // this send fails too there is nothing left to tell them.
                log::error!("Delivery failed for chat {}: {}", msg.chat.id, e);
                let _ = bot.send_message(msg.chat.id, quotes::random_error_quote()).await;
            }
        }
        Request::Unrecognized => {
            bot.send_message(msg.chat.id, quotes::UNRECOGNIZED).await?;
        }
    }

    Ok(())
}

/// Decision for a finished artifact against the Telegram upload limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    Deliver,
    RejectTooLarge,
}

/// Apply the 50 MiB upload gate. A file at exactly the limit still goes out.
pub fn size_verdict(size: u64) -> SizeVerdict {
    if size > config::validation::MAX_VIDEO_SIZE_BYTES {
        SizeVerdict::RejectTooLarge
    } else {
        SizeVerdict::Deliver
    }
}

/// Run the download pipeline for one YouTube URL and deliver the result.
async fn handle_download(bot: &Bot, msg: &Message, url: &str) -> AppResult<()> {
    // Filler reply goes out before the long-running pipeline starts.
    bot.send_message(msg.chat.id, quotes::random_downloading_quote()).await?;

    let cfg = DownloadConfig::from_env();
    let video = match download::download_video(url, &cfg).await {
        Ok(video) => video,
        Err(e) => {
            log::error!("Failed to download {} for chat {}: {}", url, msg.chat.id, e);
            bot.send_message(msg.chat.id, quotes::random_error_quote()).await?;
            return Ok(());
        }
    };

    match size_verdict(video.size) {
        SizeVerdict::RejectTooLarge => {
            log::warn!(
                "Video too large for chat {}: {} bytes, rejecting",
                msg.chat.id,
                video.size
            );
            let sent = bot.send_message(msg.chat.id, quotes::TOO_LARGE).await;
            download::cleanup(&video.path).await;
            sent.map_err(AppError::Delivery)?;
        }
        SizeVerdict::Deliver => {
            let sent = bot.send_video(msg.chat.id, InputFile::file(video.path.clone())).await;
            // The artifact is gone whether or not Telegram accepted the upload.
            download::cleanup(&video.path).await;
            sent.map_err(AppError::Delivery)?;
            log::info!("Video sent to chat: {}", msg.chat.id);
        }
    }

    Ok(())
}
