use thiserror::Error;

use crate::identity::Identity;

/// Failure kinds signalled by [`TypedRepository`](super::TypedRepository).
///
/// A failed operation never mutates the repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("item with id {id} already exists")]
    DuplicateIdentity { id: Identity },

    #[error("item with id {id} not found")]
    NotFound { id: Identity },

    #[error("invalid value for item {id}: {reason}")]
    InvalidValue { id: Identity, reason: String },
}

impl RepositoryError {
    pub(crate) fn invalid(id: Identity, reason: impl Into<String>) -> Self {
        RepositoryError::InvalidValue {
            id,
            reason: reason.into(),
        }
    }

    /// The identity the failed operation was addressed to.
    pub fn id(&self) -> Identity {
        match self {
            RepositoryError::DuplicateIdentity { id }
            | RepositoryError::NotFound { id }
            | RepositoryError::InvalidValue { id, .. } => *id,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
