//! Capability contracts that infrastructure can query or constrain against.

use crate::audit::AuditInfo;
use crate::soft_delete::SoftDeleteInfo;

/// Entities that track who created/updated them and when.
pub trait Auditable {
    fn audit_info(&self) -> &AuditInfo;

    /// Replace the audit metadata with fresh creation metadata.
    ///
    /// Useful when the time an entity is recorded as created differs from
    /// the time it was constructed (e.g. deferred persistence). Any update
    /// metadata is discarded.
    fn mark_as_created(&mut self, created_by: &str);

    /// Record an update, keeping the creation metadata.
    fn mark_as_updated(&mut self, updated_by: &str);
}

/// Entities that are logically removed instead of physically deleted.
pub trait SoftDeletable {
    fn soft_delete_info(&self) -> &SoftDeleteInfo;

    /// Record a logical deletion.
    fn mark_as_deleted(&mut self, deleted_by: &str);

    fn is_deleted(&self) -> bool {
        self.soft_delete_info().is_deleted()
    }
}
