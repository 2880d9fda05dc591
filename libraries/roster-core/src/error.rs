//! Core error types for Roster

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Roster
///
/// The variants carry the underlying message verbatim; callers add their
/// own context when surfacing them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The storage engine is unreachable or rejected the connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// A read statement failed
    #[error("{0}")]
    Query(String),

    /// A write statement failed
    #[error("{0}")]
    Exec(String),

    /// A row could not be decoded into a domain type
    #[error("{0}")]
    Decode(String),

    /// The engine did not report an identifier for an inserted row
    #[error("{0}")]
    MissingId(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity looked up
        entity: String,
        /// Identifier that was not found
        id: String,
    },

    /// Required input was missing
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Create a query error
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Create an exec error
    pub fn exec(msg: impl Into<String>) -> Self {
        Self::Exec(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
