use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in the storage core
///
/// Every mutating operation returns one of these rather than leaving the
/// caller to infer the outcome from a subsequent read. Nothing here is fatal
/// to the process; the API layer decides how each kind is presented.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("lineup references unknown team: {team_id}")]
    InvalidReference { team_id: Uuid },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("codec error at key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("key-value store unavailable: {0}")]
    StoreUnavailable(String),
}

impl StorageError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for decode failures, which enumeration callers degrade to "absent"
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
