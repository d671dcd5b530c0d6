use thiserror::Error;

/// Internal error type for store and provider operations
/// 
/// Separates infrastructure errors (Database, Parse) from directory-specific
/// failures. Not exposed via API - endpoints must convert to AuthError.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
    
    /// Failed to parse a stored value (status, JSON dashboard tags, ...)
    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },
    
    /// User directory errors that are not tied to a database driver
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }
    
    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }
}

/// User directory specific errors
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The directory backend could not be reached
    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}
