use crate::{AppState, SERVICE_NAME};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use demo_core::{generate_id, models::User, write_json, ApiError, HealthResponse};
use std::sync::Arc;

pub const NEW_USER_NAME: &str = "New User";
pub const NEW_USER_EMAIL: &str = "new@example.com";

/// The record `POST /users` stores. Request bodies are not consulted.
pub fn new_user() -> User {
    User {
        id: generate_id(),
        name: NEW_USER_NAME.to_string(),
        email: NEW_USER_EMAIL.to_string(),
        created_at: Utc::now(),
        demo: String::new(),
    }
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Response {
    let users = state.users.list().await;
    tracing::debug!(count = users.len(), "Listing users");
    write_json(StatusCode::OK, &users)
}

pub async fn create_user(State(state): State<Arc<AppState>>) -> Response {
    let user = state.users.insert(new_user()).await;
    tracing::info!(id = %user.id, "Created user");
    write_json(StatusCode::CREATED, &user)
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let user = state
        .users
        .get(&user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(write_json(StatusCode::OK, &user))
}

pub async fn health() -> Response {
    write_json(StatusCode::OK, &HealthResponse::ok(SERVICE_NAME))
}
