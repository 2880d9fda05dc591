/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    Json,
};
use roster_core::{
    error::CoreError,
    types::{NewUser, User},
};

/// GET /users
/// All users, newest first
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.list_users().await.map_err(|e| match e {
        CoreError::Decode(msg) => ServerError::Internal(format!("Error scanning row: {}", msg)),
        other => ServerError::Internal(format!("Error querying database: {}", other)),
    })?;

    Ok(Json(users))
}

/// POST /users
/// Insert a user, then read it back to pick up `id` and `created_at`
///
/// The insert and the read-back are separate statements. If the read-back
/// fails the row stays in place and the client gets a 500.
pub async fn create_user(
    State(app_state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<(StatusCode, Json<User>)> {
    if method != Method::POST {
        return Err(ServerError::MethodNotAllowed);
    }

    let new_user = parse_new_user(&body)?;
    new_user.validate()?;

    let id = app_state
        .users
        .insert_user(&new_user)
        .await
        .map_err(|e| match e {
            CoreError::MissingId(msg) => {
                ServerError::Internal(format!("Error getting last insert ID: {}", msg))
            }
            other => ServerError::Internal(format!("Error creating user: {}", other)),
        })?;

    let user = app_state.users.get_user(id).await.map_err(|e| {
        ServerError::Internal(format!("Error fetching created user: {}", e))
    })?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Decode a create payload, which must be a JSON object
///
/// Parsed by hand so that absent fields reach validation as empty strings
/// and every decode failure maps to 400. serde accepts a sequence for a
/// struct, so the object check comes first.
fn parse_new_user(body: &[u8]) -> Result<NewUser> {
    let invalid = |msg: String| ServerError::BadRequest(format!("Invalid request body: {}", msg));

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| invalid(e.to_string()))?;
    if !value.is_object() {
        return Err(invalid("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}
