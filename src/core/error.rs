use std::path::PathBuf;
use thiserror::Error;

/// Centralized error types for the application
///
/// Everything that can go wrong in the download pipeline is converted to this
/// enum. The dispatch layer maps it to a generic user-facing notice while the
/// full detail goes to the log; the user never sees exit codes or transcripts.
#[derive(Error, Debug)]
pub enum AppError {
    /// An external tool did not finish within its wall-clock budget.
    /// The process has been killed; carries the configured timeout.
    #[error("process timed out after {0}s")]
    Timeout(u64),

    /// An external tool exited with a nonzero status.
    /// The combined stdout/stderr transcript is retained for diagnostics.
    #[error("external tool exited with code {code:?}:\n{output}")]
    ExternalTool { code: Option<i32>, output: String },

    /// The downloader reported success but no matching media file was found.
    #[error("no downloaded media file found in {}", .0.display())]
    ArtifactNotFound(PathBuf),

    /// Telegram rejected an outbound message or attachment.
    #[error("Telegram error: {0}")]
    Delivery(#[from] teloxide::RequestError),

    /// IO errors (spawn failures, temp directory creation, file removal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_carries_budget() {
        let err = AppError::Timeout(30);
        assert_eq!(err.to_string(), "process timed out after 30s");
    }

    #[test]
    fn test_external_tool_display_keeps_output() {
        let err = AppError::ExternalTool {
            code: Some(1),
            output: "ERROR: unsupported URL".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("code Some(1)"));
        assert!(text.contains("unsupported URL"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
