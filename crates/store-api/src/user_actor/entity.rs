//! [`ActorEntity`] implementation for [`User`].
//!
//! Both hooks run the user validator first, so a record in the actor's collection
//! never holds a field that breaks a rule.

use super::UserError;
use crate::model::{User, UserId, UserPayload};
use crate::validation::validate_user;
use actor_framework::ActorEntity;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserPayload;
    type Update = UserPayload;
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_create_params(id: UserId, params: UserPayload) -> Result<Self, UserError> {
        let fields = validate_user(params)?;
        Ok(Self::new(id, fields))
    }

    /// Replaces name, cpf and email at once; the record is untouched on rejection.
    fn on_update(&mut self, update: UserPayload) -> Result<(), UserError> {
        let fields = validate_user(update)?;
        self.apply(fields);
        Ok(())
    }
}
