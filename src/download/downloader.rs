//! Video acquisition
//!
//! Resolves a YouTube URL to a local, already-compressed media file:
//! a per-request working directory, one yt-dlp run, artifact discovery,
//! then an unconditional pass through the compressor.

use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

use crate::conversion::video::{self, CompressionOptions};
use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::core::process;
use crate::core::types::MediaFile;
use crate::download::args::{YtdlpInvocation, OUTPUT_TEMPLATE};

/// Extensions yt-dlp may leave behind depending on the merge path.
const MEDIA_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mkv"];

/// Prefix that marks a file as already transcoded. Discovery skips these so
/// a compressor output is never re-selected as a fresh download.
pub const COMPRESSED_PREFIX: &str = "compressed_";

/// Per-download settings.
///
/// `from_env` pulls the values from the cached config statics; tests
/// construct it directly and point the binaries at stand-in scripts.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub downloader_bin: String,
    pub ffmpeg_bin: String,
    pub temp_dir: PathBuf,
    pub timeout: Duration,
    pub cookies_file: Option<PathBuf>,
    pub compression: CompressionOptions,
}

impl DownloadConfig {
    pub fn from_env() -> Self {
        Self {
            downloader_bin: config::YTDL_BIN.clone(),
            ffmpeg_bin: config::FFMPEG_BIN.clone(),
            temp_dir: PathBuf::from(&*config::TEMP_DIR),
            timeout: config::download::timeout(),
            cookies_file: config::YTDL_COOKIES_FILE.as_ref().map(PathBuf::from),
            compression: CompressionOptions::from_env(),
        }
    }
}

/// Download `url` and compress the result.
///
/// Each request gets its own subdirectory under the temp dir, so concurrent
/// requests cannot pick up each other's artifacts during discovery.
///
/// `Timeout` and `ExternalTool` errors from either tool propagate unchanged;
/// a successful yt-dlp run that leaves no media file behind becomes
/// `ArtifactNotFound`.
pub async fn download_video(url: &str, cfg: &DownloadConfig) -> AppResult<MediaFile> {
    let workdir = cfg.temp_dir.join(Uuid::new_v4().simple().to_string());
    tokio::fs::create_dir_all(&workdir).await?;

    let invocation =
        YtdlpInvocation::new(url, workdir.join(OUTPUT_TEMPLATE), cfg.cookies_file.clone());

    log::info!("Downloading video from YouTube: {}", url);
    process::run_with_timeout(&cfg.downloader_bin, &invocation.to_args(), cfg.timeout).await?;

    let downloaded = find_downloaded_file(&workdir)
        .await?
        .ok_or_else(|| AppError::ArtifactNotFound(workdir.clone()))?;

    log::info!("Video downloaded successfully: {}", downloaded.display());

    // Every download goes through the transcoder so the delivered codec and
    // container are predictable regardless of what YouTube served.
    video::compress(&downloaded, &cfg.ffmpeg_bin, &cfg.compression).await
}

/// First regular media file in `dir` that has not been transcoded yet.
pub async fn find_downloaded_file(dir: &Path) -> AppResult<Option<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(COMPRESSED_PREFIX) {
            continue;
        }
        let is_media = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| MEDIA_EXTENSIONS.contains(&ext))
            .unwrap_or(false);
        if is_media {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Remove a finished artifact and, once empty, its per-request directory.
///
/// Cleanup must never fail a request that otherwise succeeded: a missing
/// file is a no-op, any other failure is logged and swallowed.
pub async fn cleanup(file: &Path) {
    match tokio::fs::remove_file(file).await {
        Ok(()) => log::info!("Deleted temporary file: {}", file.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Failed to delete temporary file {}: {}", file.display(), e),
    }

    // Only succeeds once the directory is empty; other artifacts keep it.
    if let Some(dir) = file.parent() {
        let _ = tokio::fs::remove_dir(dir).await;
    }
}
