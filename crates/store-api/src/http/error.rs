//! Mapping of domain errors onto HTTP responses.

use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use crate::validation::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// The collection a request addresses; used to word response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Product,
}

impl Resource {
    pub fn created(self) -> String {
        format!("{self} created successfully")
    }

    pub fn updated(self) -> String {
        format!("{self} updated successfully")
    }

    pub fn removed(self) -> String {
        format!("{self} removed successfully")
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User => f.write_str("user"),
            Resource::Product => f.write_str("product"),
        }
    }
}

/// Body of every confirmation and single-message error.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a rejected payload: every violation, in rule order.
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

/// Error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 with the full list of violations.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// 404; also used for path ids that are not integers.
    #[error("{0} not found")]
    NotFound(Resource),

    /// 500; the collection actor is gone.
    #[error("{resource} store unavailable: {detail}")]
    Unavailable { resource: Resource, detail: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsResponse {
                    errors: errors.messages(),
                }),
            )
                .into_response(),
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(format!("{resource} not found"))),
            )
                .into_response(),
            ApiError::Unavailable { resource, detail } => {
                error!(%resource, %detail, "Store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("internal server error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::ValidationError(errors) => ApiError::Validation(errors),
            UserError::NotFound(_) => ApiError::NotFound(Resource::User),
            UserError::ActorCommunicationError(detail) => ApiError::Unavailable {
                resource: Resource::User,
                detail,
            },
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::ValidationError(errors) => ApiError::Validation(errors),
            ProductError::NotFound(_) => ApiError::NotFound(Resource::Product),
            ProductError::ActorCommunicationError(detail) => ApiError::Unavailable {
                resource: Resource::Product,
                detail,
            },
        }
    }
}
