use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a forecasting snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid snapshot {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
