//! Change notifications for repositories (requires the `emitter` feature).

mod observed;

pub use observed::{ObservedRepository, ENTITY_ADDED, ENTITY_REMOVED, ENTITY_UPDATED};
