//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - External tool configuration validation and logging

use anyhow::Result;
use simplelog::*;
use std::fs::File;
use std::path::Path;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the external tool configuration at application startup
///
/// A misconfigured binary path or a missing cookies file should be visible
/// here, not discovered through the first failed download.
pub fn log_tool_configuration() {
    log::info!("yt-dlp binary: {}", &*config::YTDL_BIN);
    log::info!("ffmpeg binary: {}", &*config::FFMPEG_BIN);

    match &*config::YTDL_COOKIES_FILE {
        Some(cookies_file) if Path::new(cookies_file).exists() => {
            log::info!("✅ YTDL_COOKIES_FILE: {}", cookies_file);
        }
        Some(cookies_file) => {
            log::warn!(
                "⚠️  YTDL_COOKIES_FILE: {} (file not found; age-gated videos may fail)",
                cookies_file
            );
        }
        None => {
            log::info!("YTDL_COOKIES_FILE not set, downloading without cookies");
        }
    }

    log::info!("Temp directory: {}", &*config::TEMP_DIR);
    log::info!(
        "Timeouts: download {}s, compression {}s",
        *config::download::TIMEOUT_SECS,
        *config::compression::TIMEOUT_SECS
    );
}
