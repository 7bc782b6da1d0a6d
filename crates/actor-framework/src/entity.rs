//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every resource (User, Product, …) must
//! implement to be managed by the generic `ResourceActor`. It names the id type, the
//! create/update DTOs and the per-entity error, and provides the two hooks where an
//! entity checks its own invariants: `from_create_params` and `on_update`.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all our resource types must satisfy,
//! the `ResourceActor` logic is written *once* and reused for every collection.
//!
//! We use associated types (`Id`, `Create`, `Update`, `Error`) to enforce type safety.
//! A `User` entity requires a `UserPayload`, and you can't accidentally send it a
//! `ProductPayload`.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic sequential ID generation.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One enum per actor, shared by every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier assigned to this record at creation.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the freshly allocated ID and the payload.
    ///
    /// Returning an error rejects the create: nothing is stored and the ID is not consumed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update to an existing record.
    ///
    /// Implementations must leave `self` untouched when they return an error.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
