//! The product record and its payloads.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! - Creation and update parameters: [`ProductPayload`]
//! - Validation: [`validate_product`](crate::validation::validate_product)

use super::lenient;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `fields` - Validated name and price
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
        }
    }

    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
    }
}

/// Candidate product fields for creation and updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }
}

/// Product fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_accepts_integers_and_rejects_strings() {
        let payload: ProductPayload =
            serde_json::from_value(json!({ "name": "Widget", "price": 10 })).unwrap();
        assert_eq!(payload.price, Some(10.0));

        let payload: ProductPayload =
            serde_json::from_value(json!({ "name": "Widget", "price": "10" })).unwrap();
        assert_eq!(payload.price, None);
    }

    #[test]
    fn test_product_serialization() {
        let product = Product::new(
            ProductId(1),
            ProductFields {
                name: "Widget".into(),
                price: 9.99,
            },
        );
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "id": 1, "name": "Widget", "price": 9.99 })
        );
    }
}
