//! # Framework Errors
//!
//! This module defines the common error type used throughout the actor framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! all actors and clients.

/// Errors that can occur within the actor framework itself.
///
/// `E` is the entity's own error type, carried untouched from the entity hooks so
/// that clients can recover it (e.g. a validation failure) without downcasting.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError<E: std::error::Error + 'static> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No identifiers left")]
    IdsExhausted,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(E),
}
