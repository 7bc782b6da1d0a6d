//! # Actor Framework
//!
//! This crate provides the building blocks for managing in-memory resource collections
//! behind the **Actor Model**. Each collection is owned by exactly one task and is only
//! reached through messages, which gives every collection a **Resource-Oriented** CRUD
//! surface (List, Create, Get, Update, Delete) with no shared mutable state.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your record type, its DTOs and its invariants
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, id allocation, ordered storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! You write the business rules **once** in the entity trait, and the framework handles
//! the async message passing, sequential ids and error plumbing.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("name must not be empty")]
//! struct UserError;
//!
//! impl ActorEntity for User {
//!     type Id = u32;
//!     type Create = String;
//!     type Update = String;
//!     type Error = UserError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, name: String) -> Result<Self, UserError> {
//!         if name.is_empty() { return Err(UserError); }
//!         Ok(Self { id, name })
//!     }
//!
//!     fn on_update(&mut self, name: String) -> Result<(), UserError> {
//!         if name.is_empty() { return Err(UserError); }
//!         self.name = name;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<User>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.create("Alice".into()).await.unwrap();
//!     let user = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(user.name, "Alice");
//!
//!     let rejected = client.create(String::new()).await;
//!     assert!(matches!(rejected, Err(FrameworkError::EntityError(UserError))));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! The [`mock`] module hands out real clients backed by scripted responses, so code built
//! on top of a client can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
