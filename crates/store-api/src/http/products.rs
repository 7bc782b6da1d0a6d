//! Handlers for `/products` and `/products/{id}`.

use super::error::{ApiError, MessageResponse, Resource};
use super::extract::{path_id, payload};
use super::AppState;
use crate::clients::ActorClient;
use crate::model::{Product, ProductId, ProductPayload};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let candidate: ProductPayload = payload(&body);
    state.products.create_product(candidate).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(Resource::Product.created())),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id: ProductId = path_id(&id, Resource::Product)?;
    Ok(Json(state.products.fetch(id).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: ProductId = path_id(&id, Resource::Product)?;
    let candidate: ProductPayload = payload(&body);
    state.products.update_product(id, candidate).await?;
    Ok(Json(MessageResponse::new(Resource::Product.updated())))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: ProductId = path_id(&id, Resource::Product)?;
    state.products.delete(id).await?;
    Ok(Json(MessageResponse::new(Resource::Product.removed())))
}
