//! Capabilities a record must expose to live in a [`TypedRepository`](crate::TypedRepository).

/// The unique integer key of an entity within one repository.
pub type Identity = i64;

/// Stock level carried by [`Stocked`] entities. Signed so that callers can
/// propose a negative value and get it rejected instead of wrapping.
pub type Quantity = i64;

/// Minimal capability required by the repository: a stable integer identity.
///
/// Usually derived with `#[derive(Entity)]`.
pub trait HasIdentity {
    fn id(&self) -> Identity;
}

/// Entities with a mutable quantity field (stock counts, units on hand).
pub trait Stocked: HasIdentity {
    fn quantity(&self) -> Quantity;
    fn set_quantity(&mut self, quantity: Quantity);
}

impl<T: HasIdentity + ?Sized> HasIdentity for Box<T> {
    fn id(&self) -> Identity {
        (**self).id()
    }
}
