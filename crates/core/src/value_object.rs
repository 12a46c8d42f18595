//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated in place: an
/// operation that "changes" one returns a new value and leaves the original
/// untouched, so a previous value can be kept around (e.g. for diffing)
/// without aliasing concerns.
///
/// [`AuditInfo`](crate::AuditInfo) and [`SoftDeleteInfo`](crate::SoftDeleteInfo)
/// are the value objects owned by every audited entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
