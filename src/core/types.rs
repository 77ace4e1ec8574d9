//! Shared pipeline types

use std::path::PathBuf;

use crate::core::error::AppResult;

/// A local media artifact produced by the download or compression stage.
///
/// Ownership follows the pipeline: the acquirer hands it to the compressor,
/// the compressor hands the replacement to the dispatch layer, and the
/// dispatch layer deletes it once delivered or rejected.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub path: PathBuf,
    pub size: u64,
}

impl MediaFile {
    /// Stat `path` and capture its current size.
    pub async fn from_path(path: PathBuf) -> AppResult<Self> {
        let size = tokio::fs::metadata(&path).await?.len();
        Ok(Self { path, size })
    }

    /// File name for log lines, lossy on non-UTF-8 paths.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
