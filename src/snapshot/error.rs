use std::path::PathBuf;

use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot bitcode error: {0}")]
    Bitcode(String),

    #[error("snapshot replay failed: {0}")]
    Repository(#[from] RepositoryError),
}

impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
