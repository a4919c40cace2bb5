//! Per-user company settings printed on invoices

use crate::core::entity::{Entity, Owned};
use crate::core::validation::{
    EntityValidationConfig, FieldRule, ValidatableEntity, filters, validators,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The issuing company's details and invoicing defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySettings {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bank_details: Option<String>,
    pub default_currency: Option<String>,
    pub default_tax_percent: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CompanySettings {
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            company_name: None,
            address: None,
            phone: None,
            email: None,
            bank_details: None,
            default_currency: None,
            default_tax_percent: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Entity for CompanySettings {
    fn resource_name() -> &'static str {
        "company_settings"
    }

    fn resource_name_singular() -> &'static str {
        "company_settings"
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

impl Owned for CompanySettings {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl ValidatableEntity for CompanySettings {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new("company_settings")
            .field(
                FieldRule::optional("company_name")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(255)),
            )
            .field(
                FieldRule::optional("address")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(1000)),
            )
            .field(
                FieldRule::optional("phone")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(50)),
            )
            .field(
                FieldRule::optional("email")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::email())
                    .validator(validators::string_max(255)),
            )
            .field(
                FieldRule::optional("bank_details")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(2000)),
            )
            .field(
                FieldRule::optional("default_currency")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::exact_length(3)),
            )
            .field(
                FieldRule::optional("default_tax_percent")
                    .nullable()
                    .filter(filters::coerce_number())
                    .filter(filters::round_decimals(2))
                    .validator(validators::min_value(0.0))
                    .validator(validators::max_value(100.0)),
            )
    }
}
