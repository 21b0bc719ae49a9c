mod error;
mod in_memory;
mod query;

pub use error::{RepositoryError, RepositoryResult};
pub use in_memory::{Iter, TypedRepository};
pub use query::{Count, Exists, Find, FindOne, Query};
