//! # Field Validation
//!
//! Pure functions that check candidate payloads against the field constraints of each
//! resource. Every rule is evaluated independently and all violations are collected in
//! rule order; nothing short-circuits.
//!
//! Lengths are counted in Unicode scalar values, so "José" is four characters long.

pub mod product;
pub mod user;

pub use product::{product_violations, validate_product};
pub use user::{user_violations, validate_user};

use std::fmt;

/// Minimum name length shared by users and products.
pub const NAME_MIN_LEN: usize = 3;

/// A single field-constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("name too short: at least {min} characters required")]
    NameTooShort { min: usize },
    #[error("name too long: at most {max} characters allowed")]
    NameTooLong { max: usize },
    #[error("cpf must be 11 numeric characters")]
    InvalidCpf,
    #[error("email format invalid: at least 3 characters, an '@' and a '.' after the '@'")]
    InvalidEmail,
    #[error("price must be greater than 0")]
    NonPositivePrice,
}

/// The non-empty, ordered list of violations that rejected a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Human-readable messages, one per violation, in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Name rules: missing or shorter than [`NAME_MIN_LEN`] is too short, longer than `max`
/// is too long. The two can never both apply.
pub(crate) fn check_name(name: Option<&str>, max: usize, violations: &mut Vec<Violation>) {
    let len = name.map(|name| name.chars().count());
    if !len.is_some_and(|len| len >= NAME_MIN_LEN) {
        violations.push(Violation::NameTooShort { min: NAME_MIN_LEN });
    }
    if len.is_some_and(|len| len > max) {
        violations.push(Violation::NameTooLong { max });
    }
}
