//! Core module containing the gates and fundamental traits

pub mod auth;
pub mod entity;
pub mod error;
pub mod validation;

pub use auth::{Action, Actor, ActorProvider, NoAuthProvider, OwnershipPolicy};
pub use entity::{Entity, Owned};
pub use error::{FactureError, FactureResult};
pub use validation::{EntityValidationConfig, FieldErrors, ValidatableEntity, Validated};
