//! # Store API
//!
//! An in-memory users and products CRUD service. Each collection is owned by a
//! [`ResourceActor`](actor_framework::ResourceActor) and reached through a domain client;
//! the HTTP layer is a thin translation onto those clients.
//!
//! - **[model]**: records, ids and request payloads
//! - **[validation]**: pure field-constraint checks
//! - **[user_actor]** / **[product_actor]**: entity implementations and error types
//! - **[clients]**: [`UserClient`](clients::UserClient) and [`ProductClient`](clients::ProductClient)
//! - **[lifecycle]**: starting and stopping the actors, tracing setup
//! - **[http]**: axum router and server

pub mod clients;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
pub mod validation;
