use std::ops::Deref;

use event_emitter_rs::EventEmitter;

use crate::identity::{HasIdentity, Identity, Quantity, Stocked};
use crate::repository::{RepositoryResult, TypedRepository};

/// Emitted after a successful `add`.
pub const ENTITY_ADDED: &str = "EntityAdded";
/// Emitted after a successful `remove`.
pub const ENTITY_REMOVED: &str = "EntityRemoved";
/// Emitted after any successful in-place update.
pub const ENTITY_UPDATED: &str = "EntityUpdated";

/// Wrapper that adds event emitter notifications to a [`TypedRepository`].
///
/// Every mutation is delegated to the inner repository; only successful ones
/// emit, with the entity's identity as the payload. Reads go through `Deref`,
/// so the inner repository can be inspected but not mutated behind the
/// wrapper's back.
///
/// # Example
///
/// ```ignore
/// use typed_repo::emitter::{ObservedRepository, ENTITY_ADDED};
///
/// let mut repo = ObservedRepository::new();
///
/// repo.on(ENTITY_ADDED, |id| {
///     println!("added {}", id);
/// });
///
/// repo.add(item)?;
/// ```
///
/// Listeners run on the emitter's own threads, so they observe events
/// asynchronously.
pub struct ObservedRepository<T> {
    repository: TypedRepository<T>,
    event_emitter: EventEmitter,
}

impl<T: HasIdentity> Default for ObservedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasIdentity> ObservedRepository<T> {
    pub fn new() -> Self {
        Self::wrap(TypedRepository::new())
    }

    /// Wrap an existing repository. Its current contents emit nothing.
    pub fn wrap(repository: TypedRepository<T>) -> Self {
        Self {
            repository,
            event_emitter: EventEmitter::new(),
        }
    }

    /// Unwrap and return the underlying repository.
    pub fn into_inner(self) -> TypedRepository<T> {
        self.repository
    }

    /// Register a listener for an event type. The listener receives the identity as a string.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    fn notify(&mut self, event: &str, id: Identity) {
        self.event_emitter.emit(event, id.to_string());
    }

    pub fn add(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        self.repository.add(item)?;
        self.notify(ENTITY_ADDED, id);
        Ok(())
    }

    pub fn remove(&mut self, id: Identity) -> RepositoryResult<T> {
        let removed = self.repository.remove(id)?;
        self.notify(ENTITY_REMOVED, id);
        Ok(removed)
    }

    pub fn update<F>(&mut self, id: Identity, edit: F) -> RepositoryResult<()>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Result<(), String>,
    {
        self.repository.update(id, edit)?;
        self.notify(ENTITY_UPDATED, id);
        Ok(())
    }
}

impl<T: Stocked> ObservedRepository<T> {
    pub fn update_quantity(&mut self, id: Identity, quantity: Quantity) -> RepositoryResult<()> {
        self.repository.update_quantity(id, quantity)?;
        self.notify(ENTITY_UPDATED, id);
        Ok(())
    }

    pub fn adjust_quantity(&mut self, id: Identity, delta: Quantity) -> RepositoryResult<Quantity> {
        let quantity = self.repository.adjust_quantity(id, delta)?;
        self.notify(ENTITY_UPDATED, id);
        Ok(quantity)
    }
}

impl<T> Deref for ObservedRepository<T> {
    type Target = TypedRepository<T>;

    fn deref(&self) -> &Self::Target {
        &self.repository
    }
}
