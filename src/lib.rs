//! Generic in-memory entity repository keyed by integer identity.
//!
//! [`TypedRepository`] stores one entity type behind identity-based CRUD with
//! explicit failures: [`RepositoryError::DuplicateIdentity`] on `add`,
//! [`RepositoryError::NotFound`] for unknown identities and
//! [`RepositoryError::InvalidValue`] for rejected updates. Failed operations
//! never change the repository.
//!
//! Entities opt in through [`HasIdentity`] (and [`Stocked`] for quantity
//! updates), usually via `#[derive(Entity)]`.

// `#[derive(Entity)]` expands to `typed_repo::...` paths, including inside this crate.
extern crate self as typed_repo;

pub mod domain;
#[cfg(feature = "emitter")]
pub mod emitter;
mod identity;
pub mod logging;
mod repository;
pub mod snapshot;

pub use identity::{HasIdentity, Identity, Quantity, Stocked};
pub use logging::{default_log_level, init_logging};
pub use repository::{
    Count, Exists, Find, FindOne, Iter, Query, RepositoryError, RepositoryResult, TypedRepository,
};
pub use snapshot::{SnapshotCodec, SnapshotError, SnapshotFile};
pub use typed_repo_macros::Entity;

#[cfg(feature = "emitter")]
pub use emitter::ObservedRepository;
