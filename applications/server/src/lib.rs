//! Roster Server Library
//!
//! HTTP service exposing the `users` table and a liveness probe.
//!
//! This library exposes the router and handlers so they can be driven
//! in-process by tests.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
