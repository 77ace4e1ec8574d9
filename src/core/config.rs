use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Configuration constants for the bot
///
/// Paths and binaries come from the environment once at startup; numeric
/// knobs are env-overridable with lenient parsing (a malformed value falls
/// back to the default instead of aborting).

/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Cached ffmpeg binary path
/// Read once at startup from FFMPEG_BIN environment variable or defaults to "ffmpeg"
pub static FFMPEG_BIN: Lazy<String> = Lazy::new(|| env::var("FFMPEG_BIN").unwrap_or_else(|_| "ffmpeg".to_string()));

/// Path to a Netscape-format cookies file passed to yt-dlp via `--cookies`
/// Read from YTDL_COOKIES_FILE environment variable; not set means no cookies
/// (age-gated and region-locked videos may fail without one)
pub static YTDL_COOKIES_FILE: Lazy<Option<String>> = Lazy::new(|| env::var("YTDL_COOKIES_FILE").ok());

/// Temporary directory for in-flight downloads
/// Read from TEMP_DIR environment variable, defaults to "./temp"
/// Supports tilde (~) expansion for home directory
pub static TEMP_DIR: Lazy<String> = Lazy::new(|| {
    let raw = env::var("TEMP_DIR").unwrap_or_else(|_| "./temp".to_string());
    shellexpand::tilde(&raw).into_owned()
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable, defaults to "bot.log"
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "bot.log".to_string()));

/// Parse an env var, falling back to `default` when unset or malformed.
pub(crate) fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Download configuration
pub mod download {
    use super::{env_parse, Duration, Lazy};

    /// Wall-clock budget for one yt-dlp invocation (in seconds)
    pub static TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| env_parse("DOWNLOAD_TIMEOUT_SECS", 120));

    /// Retry count passed through to yt-dlp (--retries)
    pub static RETRIES: Lazy<u32> = Lazy::new(|| env_parse("DOWNLOAD_RETRIES", 2));

    /// Socket timeout passed through to yt-dlp (--socket-timeout, in seconds)
    pub static SOCKET_TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| env_parse("DOWNLOAD_SOCKET_TIMEOUT_SECS", 30));

    /// Extractor retry count passed through to yt-dlp (--extractor-retries)
    pub static EXTRACTOR_RETRIES: Lazy<u32> = Lazy::new(|| env_parse("DOWNLOAD_EXTRACTOR_RETRIES", 2));

    /// yt-dlp command timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(*TIMEOUT_SECS)
    }
}

/// Compression configuration
pub mod compression {
    use super::{env_parse, Duration, Lazy};

    /// Wall-clock budget for one ffmpeg invocation (in seconds)
    pub static TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| env_parse("COMPRESSION_TIMEOUT_SECS", 120));

    /// Constant-rate-factor for libx264 (higher = smaller file, lower quality)
    pub static CRF: Lazy<u8> = Lazy::new(|| env_parse("VIDEO_CRF", 28));

    /// libx264 speed preset
    pub static PRESET: Lazy<String> = Lazy::new(|| super::env::var("VIDEO_PRESET").unwrap_or_else(|_| "veryfast".to_string()));

    /// AAC audio bitrate
    pub const AUDIO_BITRATE: &str = "128k";

    /// ffmpeg command timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(*TIMEOUT_SECS)
    }
}

/// Validation configuration
pub mod validation {
    /// Maximum file size for video files (50 MB in bytes)
    /// Telegram Bot API allows up to 50 MB for uploads
    pub const MAX_VIDEO_SIZE_BYTES: u64 = 50 * 1024 * 1024;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for the Telegram HTTP client (in seconds)
    /// Large enough for a 50 MB video upload on a slow link
    pub const REQUEST_TIMEOUT_SECS: u64 = 900; // 15 minutes

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_default_when_unset() {
        assert_eq!(env_parse("TUBECOURIER_TEST_UNSET_VAR", 42u64), 42);
    }

    #[test]
    fn test_max_video_size_is_50_mib() {
        assert_eq!(validation::MAX_VIDEO_SIZE_BYTES, 52_428_800);
    }
}
