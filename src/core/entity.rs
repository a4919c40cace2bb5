//! Entity traits defining the core abstraction for all domain records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all persisted domain records.
///
/// Every record in the system has:
/// - id: Unique identifier
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
/// - deleted_at: Soft deletion timestamp (optional)
///
/// Persistence itself is handled by an external data-access layer; this
/// trait only exposes the metadata the gates need.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "clients", "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "client", "product")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Get the deletion timestamp (soft delete)
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Check if the record has been soft-deleted
    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Trait for records owned by exactly one user.
///
/// The owner is set at creation; this core never reassigns it. The
/// authorization gate reads nothing else from the record.
pub trait Owned {
    /// Get the identifier of the owning user
    fn owner_id(&self) -> Uuid;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct TestRecord {
        id: Uuid,
        user_id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    }

    impl Entity for TestRecord {
        fn resource_name() -> &'static str {
            "test_records"
        }

        fn resource_name_singular() -> &'static str {
            "test_record"
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

    impl Owned for TestRecord {
        fn owner_id(&self) -> Uuid {
            self.user_id
        }
    }

    fn sample(owner: Uuid) -> TestRecord {
        let now = Utc::now();
        TestRecord {
            id: Uuid::new_v4(),
            user_id: owner,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_entity_is_deleted() {
        let mut record = sample(Uuid::new_v4());

        assert!(!record.is_deleted());

        record.deleted_at = Some(Utc::now());
        assert!(record.is_deleted());
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(TestRecord::resource_name(), "test_records");
        assert_eq!(TestRecord::resource_name_singular(), "test_record");
    }

    #[test]
    fn test_owner_id_accessor() {
        let owner = Uuid::new_v4();
        let record = sample(owner);
        assert_eq!(record.owner_id(), owner);
    }
}
