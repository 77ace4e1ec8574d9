//! Video compression via ffmpeg
//!
//! Re-encodes a downloaded file to a fixed H.264/AAC profile and replaces
//! the original on success. The profile trades quality for size so the
//! result has a chance of fitting under the Telegram upload limit.

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use crate::core::config;
use crate::core::error::AppResult;
use crate::core::process;
use crate::core::types::MediaFile;
use crate::download::downloader::COMPRESSED_PREFIX;

/// Options for the fixed H.264/AAC compression profile
#[derive(Debug, Clone)]
pub struct CompressionOptions {
    /// Target CRF value (higher = more compression, lower quality)
    pub crf: u8,
    /// libx264 speed preset (ultrafast .. veryslow)
    pub preset: String,
    /// AAC audio bitrate (e.g., "128k")
    pub audio_bitrate: String,
    /// Wall-clock budget for the ffmpeg run
    pub timeout: Duration,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            crf: 28,
            preset: "veryfast".to_string(),
            audio_bitrate: config::compression::AUDIO_BITRATE.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl CompressionOptions {
    /// Options from the cached config statics.
    pub fn from_env() -> Self {
        Self {
            crf: *config::compression::CRF,
            preset: config::compression::PRESET.clone(),
            audio_bitrate: config::compression::AUDIO_BITRATE.to_string(),
            timeout: config::compression::timeout(),
        }
    }
}

/// Compress `input` into `compressed_<name>` next to it.
///
/// On success the original input file is deleted and the compressed file is
/// returned with its size. On any failure (timeout, nonzero exit) the
/// original is left in place; cleanup is the caller's concern.
pub async fn compress(input: &Path, ffmpeg_bin: &str, options: &CompressionOptions) -> AppResult<MediaFile> {
    let input_size = tokio::fs::metadata(input).await?.len();
    log::info!(
        "Compressing video: {} ({} MB)",
        input.display(),
        input_size / 1024 / 1024
    );

    let mut output_name = OsString::from(COMPRESSED_PREFIX);
    output_name.push(input.file_name().unwrap_or_default());
    let output_path = input.with_file_name(output_name);

    let args = vec![
        "-hide_banner".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-c:v".to_string(),
        "libx264".to_string(),
        "-crf".to_string(),
        options.crf.to_string(),
        "-preset".to_string(),
        options.preset.clone(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-b:a".to_string(),
        options.audio_bitrate.clone(),
        "-movflags".to_string(),
        "+faststart".to_string(),
        "-y".to_string(),
        output_path.to_string_lossy().into_owned(),
    ];

    process::run_with_timeout(ffmpeg_bin, &args, options.timeout).await?;

    // The replacement exists; the raw download is no longer needed.
    tokio::fs::remove_file(input).await?;

    let compressed = MediaFile::from_path(output_path).await?;
    log::info!(
        "Video compressed: {} ({} MB)",
        compressed.file_name(),
        compressed.size / 1024 / 1024
    );
    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_options_default() {
        let opts = CompressionOptions::default();
        assert_eq!(opts.crf, 28);
        assert_eq!(opts.preset, "veryfast");
        assert_eq!(opts.audio_bitrate, "128k");
    }
}
