/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use roster_core::{CoreError, NewUser, User, UserId, UserStore};
use roster_server::{create_router, AppState};
use roster_storage::SqliteUserStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a fresh file-backed SQLite database
///
/// The `TempDir` must outlive the test; dropping it deletes the database.
pub async fn create_test_app() -> (Router, Arc<SqliteUserStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let store = Arc::new(SqliteUserStore::connect(&db_url).await.unwrap());
    let app = create_router(AppState::new(store.clone()));

    (app, store, temp_dir)
}

/// Router over a store whose every call fails with the given error
pub fn create_failing_app(error: CoreError) -> Router {
    create_router(AppState::new(Arc::new(FailingStore::new(error))))
}

/// Send a request and return the status and parsed JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if body_bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&body_bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// `UserStore` stand-in that fails every call
///
/// `insert_user` can be told to succeed so the read-back path can fail on
/// its own.
pub struct FailingStore {
    error: CoreError,
    insert_id: Option<UserId>,
}

impl FailingStore {
    pub fn new(error: CoreError) -> Self {
        Self {
            error,
            insert_id: None,
        }
    }

    pub fn with_insert_id(mut self, id: UserId) -> Self {
        self.insert_id = Some(id);
        self
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn list_users(&self) -> roster_core::Result<Vec<User>> {
        Err(self.error.clone())
    }

    async fn insert_user(&self, _user: &NewUser) -> roster_core::Result<UserId> {
        self.insert_id.ok_or_else(|| self.error.clone())
    }

    async fn get_user(&self, _id: UserId) -> roster_core::Result<User> {
        Err(self.error.clone())
    }

    async fn count_users(&self) -> roster_core::Result<i64> {
        Err(self.error.clone())
    }
}
