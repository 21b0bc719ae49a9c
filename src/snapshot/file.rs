use std::fmt;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{de::DeserializeOwned, Serialize};

use super::SnapshotError;
use crate::identity::HasIdentity;
use crate::repository::TypedRepository;

/// Encoding used for a snapshot file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotCodec {
    /// Pretty-printed JSON array.
    Json,
    /// Compact binary via bitcode.
    Bitcode,
}

impl fmt::Display for SnapshotCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotCodec::Json => write!(f, "json"),
            SnapshotCodec::Bitcode => write!(f, "bitcode"),
        }
    }
}

/// A file holding the full contents of one repository.
///
/// The file is a plain list of entities; restoring replays `add` for each one
/// into a fresh repository, so a file with duplicate identities is rejected.
#[derive(Clone, Debug)]
pub struct SnapshotFile<T> {
    path: PathBuf,
    codec: SnapshotCodec,
    _entity: PhantomData<fn() -> T>,
}

impl<T> SnapshotFile<T> {
    pub fn new(path: impl Into<PathBuf>, codec: SnapshotCodec) -> Self {
        Self {
            path: path.into(),
            codec,
            _entity: PhantomData,
        }
    }

    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::new(path, SnapshotCodec::Json)
    }

    pub fn bitcode(path: impl Into<PathBuf>) -> Self {
        Self::new(path, SnapshotCodec::Bitcode)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> SnapshotCodec {
        self.codec
    }
}

impl<T> SnapshotFile<T>
where
    T: HasIdentity + Clone + Serialize,
{
    /// Write every entity in `repository` to the file, replacing its contents.
    /// Returns the number of entities written.
    pub fn save(&self, repository: &TypedRepository<T>) -> Result<usize, SnapshotError> {
        let items = repository.get_all();
        let bytes = match self.codec {
            SnapshotCodec::Json => serde_json::to_vec_pretty(&items)?,
            SnapshotCodec::Bitcode => {
                bitcode::serialize(&items).map_err(|e| SnapshotError::Bitcode(e.to_string()))?
            }
        };

        std::fs::write(&self.path, bytes).map_err(|e| SnapshotError::io(self.path.clone(), e))?;

        info!(
            "event=snapshot_saved module=snapshot status=ok codec={} count={} path={}",
            self.codec,
            items.len(),
            self.path.display()
        );
        Ok(items.len())
    }
}

impl<T> SnapshotFile<T>
where
    T: HasIdentity + DeserializeOwned,
{
    /// Read the entities stored in the file. A missing file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<Vec<T>>, SnapshotError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=snapshot_missing module=snapshot status=ok path={}",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(err) => return Err(SnapshotError::io(self.path.clone(), err)),
        };

        let items: Vec<T> = match self.codec {
            SnapshotCodec::Json => serde_json::from_slice(&bytes)?,
            SnapshotCodec::Bitcode => {
                bitcode::deserialize(&bytes).map_err(|e| SnapshotError::Bitcode(e.to_string()))?
            }
        };

        info!(
            "event=snapshot_loaded module=snapshot status=ok codec={} count={} path={}",
            self.codec,
            items.len(),
            self.path.display()
        );
        Ok(Some(items))
    }

    /// Rebuild a repository from the file; empty when the file does not exist.
    pub fn restore(&self) -> Result<TypedRepository<T>, SnapshotError> {
        let items = self.load()?.unwrap_or_default();
        TypedRepository::try_from_iter(items).map_err(|err| {
            warn!(
                "event=snapshot_replay module=snapshot status=error path={} error={}",
                self.path.display(),
                err
            );
            SnapshotError::from(err)
        })
    }
}
