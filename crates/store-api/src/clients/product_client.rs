//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductId, ProductPayload};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError<ProductError>) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => inner,
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }

    fn not_found(id: &ProductId) -> Self::Error {
        ProductError::NotFound(id.to_string())
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, payload: ProductPayload) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Replaces name and price of an existing product.
    ///
    /// Returns the product as stored after the update.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, payload)
            .await
            .map_err(Self::map_error)
    }
}
