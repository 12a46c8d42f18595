//! Creation/update audit metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Who created/updated an entity and when.
///
/// Immutable: [`AuditInfo::with_updated`] returns a new value and always
/// carries `created_at`/`created_by` over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    created_at: Option<DateTime<Utc>>,
    created_by: Option<String>,
    updated_at: Option<DateTime<Utc>>,
    updated_by: Option<String>,
}

impl AuditInfo {
    /// Creation metadata stamped with the current UTC time.
    pub fn create(created_by: Option<&str>) -> Self {
        Self::create_at(created_by, Utc::now())
    }

    /// Creation metadata stamped with `at`.
    pub fn create_at(created_by: Option<&str>, at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(at),
            created_by: created_by.map(str::to_owned),
            updated_at: None,
            updated_by: None,
        }
    }

    /// Rebuild audit metadata from a persisted representation, as-is.
    pub fn restore(
        created_at: Option<DateTime<Utc>>,
        created_by: Option<String>,
        updated_at: Option<DateTime<Utc>>,
        updated_by: Option<String>,
    ) -> Self {
        Self {
            created_at,
            created_by,
            updated_at,
            updated_by,
        }
    }

    /// Copy of `self` with the update stamped at the current UTC time.
    pub fn with_updated(&self, updated_by: Option<&str>) -> Self {
        self.with_updated_at(updated_by, Utc::now())
    }

    /// Copy of `self` with the update stamped at `at`.
    pub fn with_updated_at(&self, updated_by: Option<&str>, at: DateTime<Utc>) -> Self {
        Self {
            updated_at: Some(at),
            updated_by: updated_by.map(str::to_owned),
            ..self.clone()
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    /// Time of the most recent audited change (update, else creation).
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

impl ValueObject for AuditInfo {}
