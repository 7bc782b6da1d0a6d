//! User-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Channel capacity of the User actor.
pub const BUFFER_SIZE: usize = 32;

/// Creates a new User actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(BUFFER_SIZE);
    let client = UserClient::new(generic_client);

    (actor, client)
}
