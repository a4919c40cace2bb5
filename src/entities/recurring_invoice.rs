//! Recurring invoices: templates the scheduler turns into real invoices
//!
//! Scheduling and persistence live outside this core; the gate surface
//! of a recurring invoice is ownership only.

use crate::core::entity::{Entity, Owned};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recurring invoice template owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringInvoice {
    pub id: Uuid,
    pub user_id: Uuid,
    pub client_id: Uuid,
    pub amount: f64,
    pub currency: String,
    /// Recurrence keyword understood by the scheduler ("weekly",
    /// "monthly", "yearly")
    pub frequency: String,
    pub next_run_date: DateTime<Utc>,
    /// "active" or "paused"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecurringInvoice {
    pub fn new(user_id: Uuid, client_id: Uuid, amount: f64, currency: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            client_id,
            amount,
            currency,
            frequency: "monthly".to_string(),
            next_run_date: now,
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == "active" && !self.is_deleted()
    }
}

impl Entity for RecurringInvoice {
    fn resource_name() -> &'static str {
        "recurring_invoices"
    }

    fn resource_name_singular() -> &'static str {
        "recurring_invoice"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Owned for RecurringInvoice {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
