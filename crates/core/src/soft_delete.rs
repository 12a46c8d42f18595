//! Soft deletion metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Logical deletion marker: the entity's data is retained, but it is
/// considered removed.
///
/// `is_deleted` is derived from `deleted_at` and never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDeleteInfo {
    deleted_at: Option<DateTime<Utc>>,
    deleted_by: Option<String>,
}

impl SoftDeleteInfo {
    /// Not deleted.
    pub fn create() -> Self {
        Self::default()
    }

    /// Deletion recorded at the current UTC time.
    pub fn record(deleted_by: Option<&str>) -> Self {
        Self::record_at(deleted_by, Utc::now())
    }

    /// Deletion recorded at `at`.
    pub fn record_at(deleted_by: Option<&str>, at: DateTime<Utc>) -> Self {
        Self {
            deleted_at: Some(at),
            deleted_by: deleted_by.map(str::to_owned),
        }
    }

    /// Rebuild deletion metadata from a persisted representation, as-is.
    pub fn restore(deleted_at: Option<DateTime<Utc>>, deleted_by: Option<String>) -> Self {
        Self {
            deleted_at,
            deleted_by,
        }
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn deleted_by(&self) -> Option<&str> {
        self.deleted_by.as_deref()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl ValueObject for SoftDeleteInfo {}
