//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the candidate payloads they are created and updated from.

pub mod lenient;
pub mod product;
pub mod user;

pub use product::*;
pub use user::*;
