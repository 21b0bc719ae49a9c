//! TypedRepository - HashMap-backed entity store keyed by integer identity.

use std::collections::HashMap;

use super::{RepositoryError, RepositoryResult};
use crate::identity::{HasIdentity, Identity, Quantity, Stocked};

/// In-memory repository holding entities of a single type, keyed by [`Identity`].
///
/// Lookups hand out shared references only; all mutation goes through named
/// operations so the stored identity can never drift from its key. Every
/// failing operation leaves the repository exactly as it was.
///
/// Enumeration follows insertion order.
#[derive(Debug, Clone)]
pub struct TypedRepository<T> {
    items: HashMap<Identity, T>,
    order: Vec<Identity>,
}

impl<T> Default for TypedRepository<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: HasIdentity> TypedRepository<T> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Build a repository by adding each item in turn, stopping at the first duplicate.
    pub fn try_from_iter<I>(items: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut repo = Self::new();
        for item in items {
            repo.add(item)?;
        }
        Ok(repo)
    }

    /// Store a new entity. Fails if its identity is already taken.
    pub fn add(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateIdentity { id });
        }

        self.items.insert(id, item);
        self.order.push(id);
        Ok(())
    }

    pub fn get(&self, id: Identity) -> RepositoryResult<&T> {
        self.items
            .get(&id)
            .ok_or(RepositoryError::NotFound { id })
    }

    /// Look up several entities at once; fails on the first missing identity.
    pub fn get_many(&self, ids: &[Identity]) -> RepositoryResult<Vec<&T>> {
        ids.iter().map(|id| self.get(*id)).collect()
    }

    /// Delete an entity, handing it back to the caller.
    pub fn remove(&mut self, id: Identity) -> RepositoryResult<T> {
        let item = self
            .items
            .remove(&id)
            .ok_or(RepositoryError::NotFound { id })?;
        self.order.retain(|existing| *existing != id);
        Ok(item)
    }

    pub fn contains(&self, id: Identity) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identities in insertion order.
    pub fn ids(&self) -> &[Identity] {
        &self.order
    }

    /// Borrowing iteration in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ids: self.order.iter(),
            items: &self.items,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    /// Replace a stored entity with an edited copy.
    ///
    /// `edit` runs against a clone; the stored entity is only replaced when
    /// `edit` succeeds and the clone still carries the same identity. An
    /// `Err(reason)` from `edit` surfaces as [`RepositoryError::InvalidValue`].
    pub fn update<F>(&mut self, id: Identity, edit: F) -> RepositoryResult<()>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Result<(), String>,
    {
        let mut draft = self.get(id)?.clone();
        edit(&mut draft).map_err(|reason| RepositoryError::invalid(id, reason))?;

        if draft.id() != id {
            return Err(RepositoryError::invalid(
                id,
                format!("identity is immutable (attempted change to {})", draft.id()),
            ));
        }

        self.items.insert(id, draft);
        Ok(())
    }

    /// Collect a copy of every stored entity in insertion order.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Stocked> TypedRepository<T> {
    /// Set an entity's quantity. Negative values are rejected before the lookup.
    pub fn update_quantity(&mut self, id: Identity, quantity: Quantity) -> RepositoryResult<()> {
        if quantity < 0 {
            return Err(RepositoryError::invalid(id, "quantity cannot be negative"));
        }

        let item = self
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound { id })?;
        item.set_quantity(quantity);
        Ok(())
    }

    /// Shift an entity's quantity by `delta` and return the new quantity.
    pub fn adjust_quantity(&mut self, id: Identity, delta: Quantity) -> RepositoryResult<Quantity> {
        let current = self.get(id)?.quantity();
        let next = current
            .checked_add(delta)
            .ok_or_else(|| RepositoryError::invalid(id, "quantity overflow"))?;

        self.update_quantity(id, next)?;
        Ok(next)
    }
}

/// Iterator over a repository's entities in insertion order.
pub struct Iter<'a, T> {
    ids: std::slice::Iter<'a, Identity>,
    items: &'a HashMap<Identity, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.ids.find_map(|id| items.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}

impl<'a, T: HasIdentity> IntoIterator for &'a TypedRepository<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
