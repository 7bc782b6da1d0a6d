//! Runtime orchestration and lifecycle management.
//!
//! - [`StoreSystem`] - starts the user and product actors and shuts them down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use self::tracing::*;
