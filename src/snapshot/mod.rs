//! Snapshot files: persist a repository's contents and rebuild it later.

mod error;
mod file;

pub use error::SnapshotError;
pub use file::{SnapshotCodec, SnapshotFile};
