//! Aggregate root marker.

use crate::entity::Entity;

/// Marks an entity as the root of a consistency boundary.
///
/// Carries no members beyond [`Entity`]. Repositories and transaction
/// boundaries bound their operations on `A: AggregateRoot` so that only
/// roots are loaded or saved independently; entities inside the aggregate
/// are reached through their root.
///
/// ```ignore
/// struct Order {
///     entity: AuditedEntity,
///     lines: Vec<OrderLine>,
/// }
///
/// impl_audited_entity!(Order, entity);
/// impl AggregateRoot for Order {}
/// ```
pub trait AggregateRoot: Entity {}
