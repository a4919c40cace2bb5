//! Client records: the people and companies invoices are issued to

use crate::core::entity::{Entity, Owned};
use crate::core::validation::{
    EntityValidationConfig, FieldRule, ValidatableEntity, filters, validators,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A billable client owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Client {
    pub fn new(user_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            email: None,
            phone: None,
            address: None,
            company: None,
            notes: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Entity for Client {
    fn resource_name() -> &'static str {
        "clients"
    }

    fn resource_name_singular() -> &'static str {
        "client"
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

impl Owned for Client {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl ValidatableEntity for Client {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new("client")
            .field(
                FieldRule::required("name")
                    .filter(filters::trim())
                    .validator(validators::string_max(255)),
            )
            .field(
                FieldRule::optional("email")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::email())
                    .validator(validators::string_max(255)),
            )
            .field(
                FieldRule::optional("phone")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(50)),
            )
            .field(
                FieldRule::optional("address")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(1000)),
            )
            .field(
                FieldRule::optional("company")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(255)),
            )
            .field(
                FieldRule::optional("notes")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(2000)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_name_only() {
        let errors = Client::validate_for_create(json!({})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_create_name_alone_is_enough() {
        let record = Client::validate_for_create(json!({"name": "Acme"}))
            .expect("name alone should be valid");
        assert_eq!(record, json!({"name": "Acme"}));
    }

    #[test]
    fn test_create_full_payload_normalized() {
        let record = Client::validate_for_create(json!({
            "name": " Acme ",
            "email": "billing@acme.example",
            "phone": "+33 1 23 45 67 89",
            "address": "1 rue de la Paix",
            "company": "Acme SARL",
            "notes": "Net 30"
        }))
        .expect("payload should be valid");
        assert_eq!(record["name"], json!("Acme"));
        assert_eq!(record["email"], json!("billing@acme.example"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let errors =
            Client::validate_for_create(json!({"name": "Acme", "email": "not-an-email"}))
                .unwrap_err();
        assert!(errors.contains_key("email"));
        assert_eq!(errors["email"].len(), 1);
    }

    #[test]
    fn test_update_without_name_accepted() {
        let record = Client::validate_for_update(json!({"phone": "0123456789"}))
            .expect("partial update should be valid");
        assert_eq!(record, json!({"phone": "0123456789"}));
    }

    #[test]
    fn test_null_email_accepted_as_explicit_absence() {
        let record = Client::validate_for_create(json!({"name": "Acme", "email": null}))
            .expect("null email should be accepted");
        assert_eq!(record["email"], json!(null));
    }

    #[test]
    fn test_name_too_long_rejected() {
        let errors =
            Client::validate_for_create(json!({"name": "x".repeat(256)})).unwrap_err();
        assert!(errors["name"][0].contains("255"));
    }

    #[test]
    fn test_notes_length_bound() {
        let ok = Client::validate_for_create(json!({"name": "Acme", "notes": "n".repeat(2000)}));
        assert!(ok.is_ok());
        let errors =
            Client::validate_for_create(json!({"name": "Acme", "notes": "n".repeat(2001)}))
                .unwrap_err();
        assert!(errors.contains_key("notes"));
    }

    #[test]
    fn test_client_ownership() {
        let owner = Uuid::new_v4();
        let client = Client::new(owner, "Acme".to_string());
        assert_eq!(client.owner_id(), owner);
        assert_eq!(Client::resource_name(), "clients");
    }
}
