//! Shared helpers for the pipeline tests
//!
//! External tools are replaced by small shell scripts so the pipeline can be
//! exercised end to end without yt-dlp, ffmpeg or the network.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tubecourier::conversion::CompressionOptions;
use tubecourier::DownloadConfig;

/// Write an executable shell script acting as a stand-in external tool.
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Stand-in yt-dlp: finds the `-o` output template and drops a 10 KiB
/// "video" named like a real yt-dlp result next to it.
pub fn fake_ytdlp(dir: &Path) -> PathBuf {
    fake_tool(
        dir,
        "fake-yt-dlp",
        r#"tpl=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then tpl="$arg"; fi
  prev="$arg"
done
out=$(dirname "$tpl")/"Some Video-[abc123].mp4"
dd if=/dev/zero of="$out" bs=1024 count=10 2>/dev/null"#,
    )
}

/// Stand-in ffmpeg: copies the `-i` input to the last argument.
pub fn fake_ffmpeg(dir: &Path) -> PathBuf {
    fake_tool(
        dir,
        "fake-ffmpeg",
        r#"input=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-i" ]; then input="$arg"; fi
  prev="$arg"
done
eval "out=\${$#}"
cp "$input" "$out""#,
    )
}

/// Config wired to stand-in tools under `tool_dir`, downloading into `temp_dir`.
pub fn test_config(downloader_bin: &Path, ffmpeg_bin: &Path, temp_dir: &Path) -> DownloadConfig {
    DownloadConfig {
        downloader_bin: downloader_bin.to_string_lossy().into_owned(),
        ffmpeg_bin: ffmpeg_bin.to_string_lossy().into_owned(),
        temp_dir: temp_dir.to_path_buf(),
        timeout: Duration::from_secs(10),
        cookies_file: None,
        compression: CompressionOptions {
            crf: 28,
            preset: "veryfast".to_string(),
            audio_bitrate: "128k".to_string(),
            timeout: Duration::from_secs(10),
        },
    }
}
