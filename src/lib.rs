//! # Facture
//!
//! Validation and authorization core for a billing and invoicing API:
//! client records, product catalog entries, company settings, recurring
//! invoices and the subscription-billing configuration surface.
//!
//! Two cooperating gates, both pure functions over request context:
//!
//! - **Validation gate**: per-entity rule tables turn an untrusted
//!   payload into either a normalized record or a field-indexed error
//!   report. Strict mode for creation, partial mode for updates.
//! - **Authorization gate**: ownership predicates deciding whether an
//!   actor may view, update or delete an owned record.
//!
//! Routing, persistence and the payments-provider webhook handling are
//! external collaborators; this crate only decides "is this payload
//! well-formed?" and "may this actor act on this record?".
//!
//! ## Quick Start
//!
//! ```rust
//! use facture::prelude::*;
//! use serde_json::json;
//!
//! // Validation gate
//! let record = Product::validate_for_create(json!({
//!     "name": "Consulting",
//!     "price": 150,
//!     "unit": "hour",
//! })).expect("payload is well-formed");
//! assert_eq!(record["unit"], json!("hour"));
//!
//! // Authorization gate
//! let owner = Actor::new(uuid::Uuid::new_v4());
//! let invoice = RecurringInvoice::new(owner.id, uuid::Uuid::new_v4(), 120.0, "EUR".into());
//! assert!(OwnershipPolicy.can_update(&owner, &invoice));
//! ```

pub mod billing;
pub mod core;
pub mod entities;

/// Install a tracing subscriber for local development and tests.
///
/// Respects `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Gates ===
    pub use crate::core::{
        auth::{Action, Actor, ActorProvider, NoAuthProvider, OwnershipPolicy, require_owner},
        entity::{Entity, Owned},
        error::{EntityError, FactureError, FactureResult, ValidationError},
        validation::{
            EntityValidationConfig, FieldErrors, FieldRule, ValidatableEntity, Validated,
            ValidationMode,
        },
    };

    // === Domain entities ===
    pub use crate::entities::{
        Client, CompanySettings, InvalidUnitError, Product, ProductUnit, RecurringInvoice,
    };

    // === Billing configuration ===
    pub use crate::billing::{BillingConfig, BillingPeriod, PlanNotConfigured, PlanTier};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
