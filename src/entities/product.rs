//! Product catalog entries and their unit of sale

use crate::core::entity::{Entity, Owned};
use crate::core::validation::{
    EntityValidationConfig, FieldRule, ValidatableEntity, filters, validators,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unit a product is sold in.
///
/// The wire values ("hour", "piece", "service") are a closed,
/// case-sensitive set; the display labels are mapped exhaustively so
/// that adding a variant without its label fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductUnit {
    Hour,
    Piece,
    Service,
}

impl ProductUnit {
    /// All variants, in wire order
    pub const ALL: [ProductUnit; 3] = [ProductUnit::Hour, ProductUnit::Piece, ProductUnit::Service];

    /// The stable wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductUnit::Hour => "hour",
            ProductUnit::Piece => "piece",
            ProductUnit::Service => "service",
        }
    }

    /// The display label
    pub fn label(&self) -> &'static str {
        match self {
            ProductUnit::Hour => "Hour",
            ProductUnit::Piece => "Piece",
            ProductUnit::Service => "Service",
        }
    }
}

impl fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a product unit
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid product unit (expected one of: hour, piece, service)")]
pub struct InvalidUnitError {
    pub value: String,
}

impl FromStr for ProductUnit {
    type Err = InvalidUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(ProductUnit::Hour),
            "piece" => Ok(ProductUnit::Piece),
            "service" => Ok(ProductUnit::Service),
            other => Err(InvalidUnitError {
                value: other.to_string(),
            }),
        }
    }
}

/// Validator: value is one of the product unit wire values.
///
/// A parse failure is an ordinary field message, indistinguishable from
/// any other constraint violation on `unit`.
pub fn unit() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Err(format!(
                "Le champ '{}' doit être une chaîne de caractères",
                field
            ));
        };
        match ProductUnit::from_str(s) {
            Ok(_) => Ok(()),
            Err(_) => Err(format!(
                "'{}' doit être l'une des valeurs: hour, piece, service (valeur actuelle: {})",
                field, s
            )),
        }
    }
}

/// A catalog entry owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub unit: ProductUnit,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(user_id: Uuid, name: String, price: f64, unit: ProductUnit) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            description: None,
            price,
            unit,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Entity for Product {
    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
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

impl Owned for Product {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl ValidatableEntity for Product {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new("product")
            .field(
                FieldRule::required("name")
                    .filter(filters::trim())
                    .validator(validators::string_max(255)),
            )
            .field(
                FieldRule::optional("description")
                    .nullable()
                    .filter(filters::trim())
                    .validator(validators::string_max(2000)),
            )
            .field(
                FieldRule::required("price")
                    .filter(filters::coerce_number())
                    .filter(filters::round_decimals(2))
                    .validator(validators::min_value(0.0)),
            )
            .field(FieldRule::required("unit").validator(unit()))
    }
}
