//! Inventory records kept across runs in a JSON snapshot file.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{Identity, Quantity};
use crate::repository::{RepositoryResult, TypedRepository};
use crate::snapshot::{SnapshotError, SnapshotFile};
use crate::Entity;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Entity)]
pub struct InventoryItem {
    pub id: Identity,
    pub name: String,
    #[entity(quantity)]
    pub quantity: Quantity,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: Identity,
        name: impl Into<String>,
        quantity: Quantity,
        date_added: DateTime<Utc>,
    ) -> Self {
        InventoryItem {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Qty: {}, Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// A repository of inventory items bound to the file it is saved to.
pub struct InventoryLog {
    items: TypedRepository<InventoryItem>,
    file: SnapshotFile<InventoryItem>,
}

impl InventoryLog {
    /// An empty log persisted as JSON at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_file(SnapshotFile::json(path))
    }

    pub fn with_file(file: SnapshotFile<InventoryItem>) -> Self {
        InventoryLog {
            items: TypedRepository::new(),
            file,
        }
    }

    pub fn items(&self) -> &TypedRepository<InventoryItem> {
        &self.items
    }

    pub fn file(&self) -> &SnapshotFile<InventoryItem> {
        &self.file
    }

    pub fn add(&mut self, item: InventoryItem) -> RepositoryResult<()> {
        self.items.add(item)
    }

    pub fn save(&self) -> Result<usize, SnapshotError> {
        self.file.save(&self.items)
    }

    /// Replace the in-memory items with the file's contents.
    ///
    /// Returns `None` and keeps the current items when the file does not exist.
    /// On any error the current items are kept as well.
    pub fn load(&mut self) -> Result<Option<usize>, SnapshotError> {
        let Some(loaded) = self.file.load()? else {
            return Ok(None);
        };

        let restored = TypedRepository::try_from_iter(loaded)?;
        let count = restored.len();
        self.items = restored;
        Ok(Some(count))
    }
}
