/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// A stored value could not be mapped back onto the domain type
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => Self::NotFound { entity, id },
            StorageError::Database(e) => e.into(),
            other => Self::storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RosterError;

    #[test]
    fn test_not_found_survives_conversion() {
        let err: RosterError = StorageError::not_found("User", 9).into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found: 9");
    }

    #[test]
    fn test_invalid_data_becomes_storage_error() {
        let err: RosterError = StorageError::InvalidData("bad dob".to_string()).into();
        assert!(matches!(err, RosterError::Storage(_)));
    }
}
