//! Product validator.

use super::{check_name, ValidationErrors, Violation};
use crate::model::{ProductFields, ProductPayload};

pub const PRODUCT_NAME_MAX_LEN: usize = 100;

/// Every constraint the candidate breaks, in rule order: name, price.
pub fn product_violations(candidate: &ProductPayload) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_name(candidate.name.as_deref(), PRODUCT_NAME_MAX_LEN, &mut violations);
    if !candidate.price.is_some_and(|price| price > 0.0) {
        violations.push(Violation::NonPositivePrice);
    }
    violations
}

pub fn validate_product(candidate: ProductPayload) -> Result<ProductFields, ValidationErrors> {
    let violations = product_violations(&candidate);
    match (candidate.name, candidate.price) {
        (Some(name), Some(price)) if violations.is_empty() => Ok(ProductFields { name, price }),
        _ => Err(ValidationErrors::new(violations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product() {
        let fields = validate_product(ProductPayload::new("Widget", 9.99)).unwrap();
        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.price, 9.99);
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in [0.0, -1.0, -0.01] {
            assert_eq!(
                product_violations(&ProductPayload::new("Widget", price)),
                vec![Violation::NonPositivePrice],
                "price {price} should be rejected"
            );
        }
        assert!(product_violations(&ProductPayload::new("Widget", 0.01)).is_empty());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let candidate = ProductPayload {
            name: Some("Widget".into()),
            price: None,
        };
        assert_eq!(
            product_violations(&candidate),
            vec![Violation::NonPositivePrice]
        );
    }

    #[test]
    fn test_product_name_limit_is_100() {
        assert!(product_violations(&ProductPayload::new("a".repeat(100), 1.0)).is_empty());
        assert_eq!(
            product_violations(&ProductPayload::new("a".repeat(101), 1.0)),
            vec![Violation::NameTooLong { max: 100 }]
        );
    }

    #[test]
    fn test_violations_are_collected_in_order() {
        let errors = validate_product(ProductPayload::new("TV", -5.0)).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec![
                "name too short: at least 3 characters required".to_string(),
                "price must be greater than 0".to_string(),
            ]
        );
    }
}
