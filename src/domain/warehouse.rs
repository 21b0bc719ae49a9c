//! Warehouse stock split into electronics and groceries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::{Identity, Quantity, Stocked};
use crate::repository::{RepositoryResult, TypedRepository};
use crate::Entity;

/// Common read surface of warehouse stock.
pub trait WarehouseItem: Stocked {
    fn name(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Entity)]
pub struct ElectronicItem {
    pub id: Identity,
    pub name: String,
    #[entity(quantity)]
    pub quantity: Quantity,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: Identity,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        ElectronicItem {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl WarehouseItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Electronic] ID: {}, Name: {}, Brand: {}, Qty: {}, Warranty: {} months",
            self.id, self.name, self.brand, self.quantity, self.warranty_months
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Entity)]
pub struct GroceryItem {
    pub id: Identity,
    pub name: String,
    #[entity(quantity)]
    pub quantity: Quantity,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: Identity, name: impl Into<String>, quantity: Quantity, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

impl WarehouseItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Grocery] ID: {}, Name: {}, Qty: {}, Expiry: {}",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

/// Result of a successful [`WarehouseManager::increase_stock`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockChange {
    pub id: Identity,
    pub name: String,
    pub quantity: Quantity,
}

impl fmt::Display for StockChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stock updated for {}. New Qty: {}", self.name, self.quantity)
    }
}

#[derive(Default)]
pub struct WarehouseManager {
    electronics: TypedRepository<ElectronicItem>,
    groceries: TypedRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics(&self) -> &TypedRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut TypedRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &TypedRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut TypedRepository<GroceryItem> {
        &mut self.groceries
    }

    /// Add `delta` units to an item's stock.
    pub fn increase_stock<T: WarehouseItem>(
        repository: &mut TypedRepository<T>,
        id: Identity,
        delta: Quantity,
    ) -> RepositoryResult<StockChange> {
        let quantity = repository.adjust_quantity(id, delta)?;
        let name = repository.get(id)?.name().to_string();
        Ok(StockChange { id, name, quantity })
    }

    pub fn remove_item<T: WarehouseItem>(
        repository: &mut TypedRepository<T>,
        id: Identity,
    ) -> RepositoryResult<T> {
        repository.remove(id)
    }
}
