//! Guid-keyed entity with audit and soft-deletion metadata.

use serde::{Deserialize, Serialize};

use crate::audit::AuditInfo;
use crate::capability::{Auditable, SoftDeletable};
use crate::entity::{Entity, EntityBase};
use crate::id::EntityId;
use crate::soft_delete::SoftDeleteInfo;

/// Identity + [`AuditInfo`] + [`SoftDeleteInfo`], each owned by value.
///
/// Application entities embed one and delegate to it with
/// [`impl_audited_entity!`](crate::impl_audited_entity). The metadata values
/// are never mutated in place; every `mark_as_*` call swaps in a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditedEntity {
    base: EntityBase<EntityId>,
    audit_info: AuditInfo,
    soft_delete_info: SoftDeleteInfo,
}

impl AuditedEntity {
    /// New entity with a freshly generated identifier.
    pub fn new() -> Self {
        Self::with_id(EntityId::new())
    }

    /// New entity with an explicit identifier, used verbatim.
    pub fn with_id(id: EntityId) -> Self {
        Self {
            base: EntityBase::new(id),
            audit_info: AuditInfo::create(None),
            soft_delete_info: SoftDeleteInfo::create(),
        }
    }

    /// Rehydrate an entity from its persisted parts without touching the clock.
    pub fn restore(id: EntityId, audit_info: AuditInfo, soft_delete_info: SoftDeleteInfo) -> Self {
        Self {
            base: EntityBase::new(id),
            audit_info,
            soft_delete_info,
        }
    }
}

impl Default for AuditedEntity {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for AuditedEntity {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        self.base.id()
    }
}

impl Auditable for AuditedEntity {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn mark_as_created(&mut self, created_by: &str) {
        self.audit_info = AuditInfo::create(Some(created_by));
        tracing::debug!(entity_id = %self.id(), actor = created_by, "entity marked as created");
    }

    fn mark_as_updated(&mut self, updated_by: &str) {
        self.audit_info = self.audit_info.with_updated(Some(updated_by));
        tracing::debug!(entity_id = %self.id(), actor = updated_by, "entity marked as updated");
    }
}

impl SoftDeletable for AuditedEntity {
    fn soft_delete_info(&self) -> &SoftDeleteInfo {
        &self.soft_delete_info
    }

    fn mark_as_deleted(&mut self, deleted_by: &str) {
        self.soft_delete_info = SoftDeleteInfo::record(Some(deleted_by));
        tracing::debug!(entity_id = %self.id(), actor = deleted_by, "entity marked as deleted");
    }
}

/// Implement [`Entity`], [`Auditable`] and [`SoftDeletable`] for a type that
/// embeds an [`AuditedEntity`].
///
/// ```ignore
/// struct Customer {
///     entity: AuditedEntity,
///     name: String,
/// }
///
/// impl_audited_entity!(Customer, entity);
/// ```
#[macro_export]
macro_rules! impl_audited_entity {
    ($t:ty, $field:ident) => {
        impl $crate::Entity for $t {
            type Id = $crate::EntityId;

            fn id(&self) -> &Self::Id {
                $crate::Entity::id(&self.$field)
            }
        }

        impl $crate::Auditable for $t {
            fn audit_info(&self) -> &$crate::AuditInfo {
                $crate::Auditable::audit_info(&self.$field)
            }

            fn mark_as_created(&mut self, created_by: &str) {
                $crate::Auditable::mark_as_created(&mut self.$field, created_by)
            }

            fn mark_as_updated(&mut self, updated_by: &str) {
                $crate::Auditable::mark_as_updated(&mut self.$field, updated_by)
            }
        }

        impl $crate::SoftDeletable for $t {
            fn soft_delete_info(&self) -> &$crate::SoftDeleteInfo {
                $crate::SoftDeletable::soft_delete_info(&self.$field)
            }

            fn mark_as_deleted(&mut self, deleted_by: &str) {
                $crate::SoftDeletable::mark_as_deleted(&mut self.$field, deleted_by)
            }
        }
    };
}
