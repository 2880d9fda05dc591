/// User domain types
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Engine-assigned user identifier
pub type UserId = i64;

/// Message returned when a required field is empty or absent
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and email are required";

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned on insert
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address, not checked for uniqueness
    pub email: String,

    /// Creation timestamp (RFC 3339, UTC)
    pub created_at: String,
}

/// Fields accepted when creating a user
///
/// Absent fields deserialize as empty strings so that presence is checked
/// by [`NewUser::validate`] rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Contact address
    #[serde(default)]
    pub email: String,
}

impl NewUser {
    /// Create a new user payload
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both `name` and `email` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(CoreError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(())
    }
}
