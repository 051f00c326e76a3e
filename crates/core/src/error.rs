use crate::types::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The backing store rejected or failed the operation. Never retried.
    #[error("Store failure: {0}")]
    StoreFailure(#[source] BoxError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Wrap any storage error, keeping it as the error source.
    pub fn store(err: impl Into<BoxError>) -> Self {
        CoreError::StoreFailure(err.into())
    }
}
