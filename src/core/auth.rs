//! Authorization gate for owned records
//!
//! Ownership is the only rule: an actor may view, update or delete a
//! record iff it owns it. The policy is a pure predicate with no side
//! effects; a denied check is a boolean "no", never an error. Callers
//! are expected to surface a deny as not-found so that unauthorized
//! actors cannot probe for resource existence.

use crate::core::entity::Owned;
use crate::core::error::{EntityError, FactureError};
use anyhow::Result;
use async_trait::async_trait;
use axum::http::Request;
use uuid::Uuid;

/// An authenticated identity, immutable for the duration of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
}

impl Actor {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// The actions the gate decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Update,
    Delete,
}

/// Ownership-based authorization policy.
///
/// All three actions currently apply the identical rule; there is no
/// finer-grained split (no read-only sharing, no admin bypass).
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPolicy;

impl OwnershipPolicy {
    pub fn can_view(&self, actor: &Actor, record: &impl Owned) -> bool {
        self.owns(actor, record)
    }

    pub fn can_update(&self, actor: &Actor, record: &impl Owned) -> bool {
        self.owns(actor, record)
    }

    pub fn can_delete(&self, actor: &Actor, record: &impl Owned) -> bool {
        self.owns(actor, record)
    }

    /// Check a named action against a record.
    pub fn allows(&self, action: Action, actor: &Actor, record: &impl Owned) -> bool {
        match action {
            Action::View => self.can_view(actor, record),
            Action::Update => self.can_update(actor, record),
            Action::Delete => self.can_delete(actor, record),
        }
    }

    fn owns(&self, actor: &Actor, record: &impl Owned) -> bool {
        actor.id == record.owner_id()
    }
}

/// Check an action and map a deny to a not-found error.
///
/// Mutation handlers call this before touching a record. The error
/// deliberately carries no hint that the record exists but belongs to
/// someone else.
pub fn require_owner<E>(
    policy: &OwnershipPolicy,
    action: Action,
    actor: &Actor,
    record: &E,
    resource_type: &str,
    resource_id: Uuid,
) -> Result<(), FactureError>
where
    E: Owned,
{
    if policy.allows(action, actor, record) {
        Ok(())
    } else {
        tracing::debug!(
            actor = %actor.id,
            resource = resource_type,
            ?action,
            "ownership check denied"
        );
        Err(EntityError::NotFound {
            entity_type: resource_type.to_string(),
            id: resource_id,
        }
        .into())
    }
}

/// Trait for extracting the authenticated actor from an HTTP request.
///
/// The real implementation lives in the surrounding application (session
/// or token based); this core only defines the seam.
#[async_trait]
pub trait ActorProvider: Send + Sync {
    /// Extract the actor, or None when the request is unauthenticated
    async fn actor_from_request<B: Send + Sync>(&self, req: &Request<B>) -> Result<Option<Actor>>;
}

/// Provider that never authenticates anyone (for development and tests).
pub struct NoAuthProvider;

#[async_trait]
impl ActorProvider for NoAuthProvider {
    async fn actor_from_request<B: Send + Sync>(
        &self,
        _req: &Request<B>,
    ) -> Result<Option<Actor>> {
        Ok(None)
    }
}
