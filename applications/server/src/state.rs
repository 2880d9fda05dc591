/// Shared application state
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The store is injected here rather than reached through a global, so a
/// substitute backend can stand in for `SQLite` in tests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
