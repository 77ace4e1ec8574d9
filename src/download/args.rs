//! Declarative yt-dlp argument construction
//!
//! One invocation is described as data and rendered into an argument vector
//! in `to_args`, so the tool-specific flag syntax stays out of the
//! orchestration code.

use std::path::PathBuf;

use crate::core::config;

/// Format selector: best mp4 video plus m4a audio, falling back to the best
/// single mp4, then to the best overall format.
pub const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

/// Output file name template: title and id, extension chosen by yt-dlp.
pub const OUTPUT_TEMPLATE: &str = "%(title)s-[%(id)s].%(ext)s";

/// One yt-dlp invocation, described as data.
#[derive(Debug, Clone)]
pub struct YtdlpInvocation {
    pub url: String,
    pub format: String,
    pub merge_output_format: String,
    /// Full output template path, working directory included.
    pub output_template: PathBuf,
    pub no_playlist: bool,
    pub retries: u32,
    pub socket_timeout_secs: u64,
    pub extractor_retries: u32,
    /// When false, `--no-check-certificates` is emitted.
    pub check_certificates: bool,
    /// Netscape-format cookies file, passed via `--cookies` when set.
    pub cookies_file: Option<PathBuf>,
}

impl YtdlpInvocation {
    /// Invocation with the fixed download policy and the configured
    /// retry/timeout pass-through values. The cookies file comes from the
    /// caller's `DownloadConfig`, never from the environment.
    pub fn new(url: &str, output_template: PathBuf, cookies_file: Option<PathBuf>) -> Self {
        Self {
            url: url.to_string(),
            format: FORMAT_SELECTOR.to_string(),
            merge_output_format: "mp4".to_string(),
            output_template,
            no_playlist: true,
            retries: *config::download::RETRIES,
            socket_timeout_secs: *config::download::SOCKET_TIMEOUT_SECS,
            extractor_retries: *config::download::EXTRACTOR_RETRIES,
            check_certificates: false,
            cookies_file,
        }
    }

    /// Render the argument vector in the order yt-dlp expects, URL last.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(ref cookies) = self.cookies_file {
            args.push("--cookies".to_string());
            args.push(cookies.to_string_lossy().into_owned());
        }

        args.push("-f".to_string());
        args.push(self.format.clone());
        args.push("--merge-output-format".to_string());
        args.push(self.merge_output_format.clone());
        args.push("-o".to_string());
        args.push(self.output_template.to_string_lossy().into_owned());

        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }

        args.push("--retries".to_string());
        args.push(self.retries.to_string());
        args.push("--socket-timeout".to_string());
        args.push(self.socket_timeout_secs.to_string());
        args.push("--extractor-retries".to_string());
        args.push(self.extractor_retries.to_string());

        if !self.check_certificates {
            args.push("--no-check-certificates".to_string());
        }

        args.push(self.url.clone());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invocation() -> YtdlpInvocation {
        YtdlpInvocation {
            url: "https://youtu.be/abc123".to_string(),
            format: FORMAT_SELECTOR.to_string(),
            merge_output_format: "mp4".to_string(),
            output_template: PathBuf::from("/tmp/work").join(OUTPUT_TEMPLATE),
            no_playlist: true,
            retries: 2,
            socket_timeout_secs: 30,
            extractor_retries: 2,
            check_certificates: false,
            cookies_file: None,
        }
    }

    #[test]
    fn test_args_order_and_url_last() {
        let args = invocation().to_args();
        assert_eq!(
            args,
            vec![
                "-f",
                FORMAT_SELECTOR,
                "--merge-output-format",
                "mp4",
                "-o",
                "/tmp/work/%(title)s-[%(id)s].%(ext)s",
                "--no-playlist",
                "--retries",
                "2",
                "--socket-timeout",
                "30",
                "--extractor-retries",
                "2",
                "--no-check-certificates",
                "https://youtu.be/abc123",
            ]
        );
    }

    #[test]
    fn test_cookies_file_comes_first() {
        let mut inv = invocation();
        inv.cookies_file = Some(PathBuf::from("/etc/cookies.txt"));
        let args = inv.to_args();
        assert_eq!(args[0], "--cookies");
        assert_eq!(args[1], "/etc/cookies.txt");
    }

    #[test]
    fn test_certificate_check_suppresses_flag() {
        let mut inv = invocation();
        inv.check_certificates = true;
        assert!(!inv.to_args().contains(&"--no-check-certificates".to_string()));
    }

    #[test]
    fn test_new_threads_cookies_through() {
        let with = YtdlpInvocation::new(
            "https://youtu.be/abc123",
            PathBuf::from("/tmp/work").join(OUTPUT_TEMPLATE),
            Some(PathBuf::from("/etc/cookies.txt")),
        );
        assert_eq!(with.cookies_file, Some(PathBuf::from("/etc/cookies.txt")));

        let without = YtdlpInvocation::new(
            "https://youtu.be/abc123",
            PathBuf::from("/tmp/work").join(OUTPUT_TEMPLATE),
            None,
        );
        assert_eq!(without.cookies_file, None);
        assert!(!without.to_args().contains(&"--cookies".to_string()));
    }

    #[test]
    fn test_playlist_toggle() {
        let mut inv = invocation();
        inv.no_playlist = false;
        assert!(!inv.to_args().contains(&"--no-playlist".to_string()));
    }
}
