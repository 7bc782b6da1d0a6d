//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `list`, `get`,
//! `fetch` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// Implementors only say how to reach the inner client and how to translate framework
/// errors; the read and delete operations come for free.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)]
/// struct User { id: u32 }
/// #[derive(Debug, thiserror::Error)]
/// enum UserError {
///     #[error("user {0} not found")]
///     NotFound(String),
///     #[error("{0}")]
///     Other(String),
/// }
///
/// impl ActorEntity for User {
///     type Id = u32;
///     type Create = ();
///     type Update = ();
///     type Error = UserError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: ()) -> Result<Self, UserError> { Ok(Self { id }) }
///     fn on_update(&mut self, _: ()) -> Result<(), UserError> { Ok(()) }
/// }
///
/// struct UserClient {
///     inner: ResourceClient<User>,
/// }
///
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///
///     fn inner(&self) -> &ResourceClient<User> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError<UserError>) -> UserError {
///         match e {
///             FrameworkError::EntityError(inner) => inner,
///             FrameworkError::NotFound(id) => UserError::NotFound(id),
///             other => UserError::Other(other.to_string()),
///         }
///     }
///
///     fn not_found(id: &u32) -> UserError {
///         UserError::NotFound(id.to_string())
///     }
/// }
///
/// async fn usage(client: UserClient) {
///     // list(), get(), fetch() and delete() are provided automatically!
///     let _ = client.list().await;
///     let _ = client.fetch(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError<T::Error>) -> Self::Error;

    /// The error reported when no record carries `id`.
    fn not_found(id: &T::Id) -> Self::Error;

    /// Every record, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID, treating a missing record as an error.
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        let found = self.get(id.clone()).await?;
        found.ok_or_else(|| Self::not_found(&id))
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
