use crate::model::{User, UserId, UserPayload};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError<UserError>) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => inner,
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }

    fn not_found(id: &UserId) -> Self::Error {
        UserError::NotFound(id.to_string())
    }
}

impl UserClient {
    /// Validates the payload and stores a new user, returning its id.
    #[instrument(skip(self))]
    pub async fn create_user(&self, payload: UserPayload) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Replaces every field of an existing user.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, payload: UserPayload) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .update(id, payload)
            .await
            .map_err(Self::map_error)
    }
}
