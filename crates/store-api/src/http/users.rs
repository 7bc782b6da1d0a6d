//! Handlers for `/users` and `/users/{id}`.

use super::error::{ApiError, MessageResponse, Resource};
use super::extract::{path_id, payload};
use super::AppState;
use crate::clients::ActorClient;
use crate::model::{User, UserId, UserPayload};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let candidate: UserPayload = payload(&body);
    state.users.create_user(candidate).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(Resource::User.created())),
    ))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id: UserId = path_id(&id, Resource::User)?;
    Ok(Json(state.users.fetch(id).await?))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: UserId = path_id(&id, Resource::User)?;
    let candidate: UserPayload = payload(&body);
    state.users.update_user(id, candidate).await?;
    Ok(Json(MessageResponse::new(Resource::User.updated())))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: UserId = path_id(&id, Resource::User)?;
    state.users.delete(id).await?;
    Ok(Json(MessageResponse::new(Resource::User.removed())))
}
