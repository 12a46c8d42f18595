//! `structum-core` — domain modeling building blocks.
//!
//! Identity-based entities, aggregate-root marking, creation/update audit
//! metadata and soft deletion. This crate contains **pure domain** primitives
//! (no infrastructure concerns): nothing here performs IO, and every
//! operation is total.

pub mod aggregate;
pub mod audit;
pub mod audited;
pub mod capability;
pub mod entity;
pub mod error;
pub mod id;
pub mod soft_delete;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use audit::AuditInfo;
pub use audited::AuditedEntity;
pub use capability::{Auditable, SoftDeletable};
pub use entity::{ByIdentity, Entity, EntityBase, identity_eq};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use soft_delete::SoftDeleteInfo;
pub use value_object::ValueObject;
