//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that owns one collection
//! of entities. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the collection.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the
/// read-modify-write of every create, update and delete is serialized without a
/// `Mutex`. Two requests can never be handed the same ID, and an update can never be
/// lost to a concurrent one.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("empty note")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> {
///         if text.is_empty() { return Err(NoteError); }
///         Ok(Self { id, text })
///     }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> {
///         self.text = text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(id, 1);
/// }
/// ```
///
/// # Implementation Details
///
/// Records live in a `Vec` in insertion order, next to a `u32` counter (`next_id`)
/// that starts at 1.
///
/// * **List**: clones the whole collection.
/// * **Create**: builds the entity with the next ID via `T::from_create_params`; only
///   when that succeeds is the record appended and the counter advanced. IDs are never
///   reused, even after a delete. The last id handed out is `u32::MAX - 1`; later
///   creates answer `FrameworkError::IdsExhausted`.
/// * **Get / Update / Delete**: find the record by a linear scan over the collection
///   (O(n)). A missing ID answers `FrameworkError::NotFound` for update and delete, and
///   `None` for get.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "store_api::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(following) = self.next_id.checked_add(1) else {
                        warn!(entity_type, "Ids exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.push(item);
                            self.next_id = following;
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let item = &mut self.store[index];
                    if let Err(e) = item.on_update(update) {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(e)));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.position(&id) {
                        Some(index) => {
                            self.store.remove(index);
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("label must not be empty")]
    struct TagError;

    impl ActorEntity for Tag {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Error = TagError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, label: String) -> Result<Self, TagError> {
            if label.is_empty() {
                return Err(TagError);
            }
            Ok(Self { id, label })
        }

        fn on_update(&mut self, label: String) -> Result<(), TagError> {
            if label.is_empty() {
                return Err(TagError);
            }
            self.label = label;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        let rejected = client.create(String::new()).await;
        assert!(matches!(rejected, Err(FrameworkError::EntityError(TagError))));

        let id = client.create("rust".to_string()).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_is_rejected_once_ids_run_out() {
        let (mut actor, client) = ResourceActor::<Tag>::new(10);
        actor.next_id = u32::MAX - 1;
        tokio::spawn(actor.run());

        let last = client.create("last".to_string()).await.unwrap();
        assert_eq!(last, u32::MAX - 1);

        let rejected = client.create("overflow".to_string()).await;
        assert!(matches!(rejected, Err(FrameworkError::IdsExhausted)));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_record_untouched() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        let id = client.create("rust".to_string()).await.unwrap();
        let result = client.update(id, String::new()).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let tag = client.get(id).await.unwrap().unwrap();
        assert_eq!(tag.label, "rust");
    }

    #[tokio::test]
    async fn test_delete_keeps_insertion_order() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        for label in ["a", "b", "c"] {
            client.create(label.to_string()).await.unwrap();
        }
        client.delete(2).await.unwrap();

        let labels: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|tag| tag.label)
            .collect();
        assert_eq!(labels, vec!["a", "c"]);
    }
}
