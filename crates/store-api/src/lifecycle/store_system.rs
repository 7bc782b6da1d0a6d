use crate::clients::{ProductClient, UserClient};
use crate::http::AppState;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors that stop the service as a whole.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the users and products collections.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Wiring**: Handing the clients to the HTTP layer through [`AppState`]
///
/// # Example
///
/// ```rust
/// use store_api::clients::ActorClient;
/// use store_api::lifecycle::StoreSystem;
/// use store_api::model::UserPayload;
///
/// #[tokio::main]
/// async fn main() {
///     let system = StoreSystem::new();
///
///     let id = system
///         .user_client
///         .create_user(UserPayload::new("Maria", "12345678901", "maria@example.com"))
///         .await
///         .unwrap();
///     assert_eq!(system.user_client.fetch(id).await.unwrap().name, "Maria");
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct StoreSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreSystem {
    /// Creates both actors and spawns each on its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (user_actor, user_client) = crate::user_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();

        let user_handle = tokio::spawn(user_actor.run());
        let product_handle = tokio::spawn(product_actor.run());

        Self {
            user_client,
            product_client,
            handles: vec![user_handle, product_handle],
        }
    }

    /// Shared state for the HTTP router.
    pub fn app_state(&self) -> AppState {
        AppState {
            users: self.user_client.clone(),
            products: self.product_client.clone(),
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels once every clone handed out through
    /// [`StoreSystem::app_state`] is gone too; each actor then leaves its loop. Returns
    /// an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
