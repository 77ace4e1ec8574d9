//! Download management: yt-dlp invocation and artifact discovery

pub mod args;
pub mod downloader;

// Re-exports for convenience
pub use args::YtdlpInvocation;
pub use downloader::{cleanup, download_video, find_downloaded_file, DownloadConfig, COMPRESSED_PREFIX};
