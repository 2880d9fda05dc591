//! Roster Core
//!
//! Domain types, the storage trait and the error taxonomy shared by the
//! storage layer and the HTTP server.
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::NewUser;
//!
//! let new_user = NewUser::new("Alice", "alice@example.com");
//! assert!(new_user.validate().is_ok());
//!
//! let incomplete = NewUser::new("Alice", "");
//! assert!(incomplete.validate().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{CoreError, Result};
pub use storage::UserStore;
pub use types::{NewUser, User, UserId};
