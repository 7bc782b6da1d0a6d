//! Error types for the Product actor.

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product validation error: {0}")]
    ValidationError(ValidationErrors),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        ProductError::ValidationError(errors)
    }
}
