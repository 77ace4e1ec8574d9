//! Process execution utilities with timeout support
//!
//! Provides the single entry point for running external tools (yt-dlp,
//! ffmpeg) with their combined output drained on background tasks so a full
//! pipe can never stall the child, and a wall-clock timeout after which the
//! child is killed.

use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::core::error::{AppError, AppResult};

/// Run an external command, waiting up to `timeout` for it to finish.
///
/// stdout and stderr are drained line by line into one combined transcript
/// while the main task performs the bounded wait. The transcript is
/// diagnostic only: it is returned on success and embedded in the error on a
/// nonzero exit. On timeout the child is killed and no output is salvaged.
pub async fn run_with_timeout(program: &str, args: &[String], timeout: Duration) -> AppResult<String> {
    log::debug!("Running: {} {}", program, args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let transcript: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let mut drains: Vec<JoinHandle<()>> = Vec::with_capacity(2);

    if let Some(stdout) = child.stdout.take() {
        drains.push(spawn_drain(program.to_string(), stdout, Arc::clone(&transcript)));
    }
    if let Some(stderr) = child.stderr.take() {
        drains.push(spawn_drain(program.to_string(), stderr, Arc::clone(&transcript)));
    }

    let status = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(wait_result) => wait_result?,
        Err(_) => {
            log::warn!("{} timed out after {}s, killing process", program, timeout.as_secs());
            let _ = child.start_kill();
            let _ = child.wait().await;
            for drain in drains {
                let _ = drain.await;
            }
            return Err(AppError::Timeout(timeout.as_secs()));
        }
    };

    // The child has exited, so both pipes are at EOF and the drains finish.
    for drain in drains {
        let _ = drain.await;
    }

    let output = match transcript.lock() {
        Ok(lines) => lines.join("\n"),
        Err(_) => String::new(),
    };

    if status.success() {
        Ok(output)
    } else {
        Err(AppError::ExternalTool {
            code: status.code(),
            output,
        })
    }
}

/// Drain one child pipe into the shared transcript on a background task.
fn spawn_drain<R>(tool: String, stream: R, transcript: Arc<Mutex<Vec<String>>>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            log::debug!("{}: {}", tool, line);
            if let Ok(mut sink) = transcript.lock() {
                sink.push(line);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_zero_exit_returns_output() {
        let output = run_with_timeout("sh", &sh("echo out; echo err 1>&2"), Duration::from_secs(5))
            .await
            .unwrap();
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_code_and_output() {
        let err = run_with_timeout("sh", &sh("echo doomed; exit 7"), Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            AppError::ExternalTool { code, output } => {
                assert_eq!(code, Some(7));
                assert!(output.contains("doomed"));
            }
            other => panic!("expected ExternalTool, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_kills_process() {
        let started = std::time::Instant::now();
        let err = run_with_timeout("sh", &sh("sleep 30"), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Timeout(0)));
        // Killed promptly, not after the sleep ran its course.
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_io() {
        let err = run_with_timeout("/nonexistent/binary", &[], Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
