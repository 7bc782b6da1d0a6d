use super::ProductError;
use crate::model::{Product, ProductId, ProductPayload};
use crate::validation::validate_product;
use actor_framework::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductPayload;
    type Update = ProductPayload;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductPayload) -> Result<Self, ProductError> {
        let fields = validate_product(params)?;
        Ok(Self::new(id, fields))
    }

    fn on_update(&mut self, update: ProductPayload) -> Result<(), ProductError> {
        let fields = validate_product(update)?;
        self.apply(fields);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_replaces_name_and_price() {
        let mut product =
            Product::from_create_params(ProductId(1), ProductPayload::new("Widget", 9.99))
                .unwrap();
        product
            .on_update(ProductPayload::new("Gadget", 19.5))
            .unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.price, 19.5);
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let result = Product::from_create_params(ProductId(1), ProductPayload::new("Widget", 0.0));
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }
}
