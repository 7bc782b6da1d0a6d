use super::lenient;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// A `User` only ever holds validated fields: it is built from [`UserFields`], which in
/// turn only comes out of [`validate_user`](crate::validation::validate_user).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub cpf: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            cpf: fields.cpf,
            email: fields.email,
        }
    }

    /// Overwrites every field, keeping the id.
    pub fn apply(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.cpf = fields.cpf;
        self.email = fields.email;
    }
}

/// Candidate user fields as received from a client, used for both create and update.
///
/// Every field is optional; a field holding the wrong JSON type reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cpf: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cpf: Some(cpf.into()),
            email: Some(email.into()),
        }
    }
}

/// User fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub name: String,
    pub cpf: String,
    pub email: String,
}
