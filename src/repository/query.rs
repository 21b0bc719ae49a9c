use super::TypedRepository;
use crate::identity::HasIdentity;

/// Find all entities matching a predicate.
pub trait Find {
    type Item;

    fn find<F>(&self, predicate: F) -> Vec<Self::Item>
    where
        F: Fn(&Self::Item) -> bool;
}

/// Find the first entity matching a predicate.
pub trait FindOne {
    type Item;

    fn find_one<F>(&self, predicate: F) -> Option<Self::Item>
    where
        F: Fn(&Self::Item) -> bool;
}

/// Check if any entity matches a predicate.
pub trait Exists {
    type Item;

    fn exists<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Self::Item) -> bool;
}

/// Count entities matching a predicate.
pub trait Count {
    type Item;

    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Self::Item) -> bool;
}

/// All read-side query capabilities.
pub trait Query<T>: Find<Item = T> + FindOne<Item = T> + Exists<Item = T> + Count<Item = T> {}

// Blanket implementation: anything implementing all query traits is a Query
impl<T, R> Query<T> for R where
    R: Find<Item = T> + FindOne<Item = T> + Exists<Item = T> + Count<Item = T>
{
}

// Results come back in insertion order, cloned out of the repository.

impl<T: HasIdentity + Clone> Find for TypedRepository<T> {
    type Item = T;

    fn find<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|item| predicate(*item)).cloned().collect()
    }
}

impl<T: HasIdentity + Clone> FindOne for TypedRepository<T> {
    type Item = T;

    fn find_one<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|item| predicate(*item)).cloned()
    }
}

impl<T: HasIdentity> Exists for TypedRepository<T> {
    type Item = T;

    fn exists<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }
}

impl<T: HasIdentity> Count for TypedRepository<T> {
    type Item = T;

    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|item| predicate(*item)).count()
    }
}
