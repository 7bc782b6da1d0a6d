//! Product-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Channel capacity of the Product actor.
pub const BUFFER_SIZE: usize = 32;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(BUFFER_SIZE);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
