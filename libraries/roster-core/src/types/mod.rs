//! Domain types

mod timestamp;
mod user;

pub use timestamp::{format_unix_timestamp, now_rfc3339};
pub use user::{NewUser, User, UserId, REQUIRED_FIELDS_MESSAGE};
