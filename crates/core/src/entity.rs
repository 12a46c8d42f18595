//! Entity trait: identity + continuity across state changes.
//!
//! Entities are compared by identifier, never by attribute state. The
//! comparison is exposed as explicit functions ([`Entity::same_identity`],
//! [`Entity::hash_identity`], [`identity_eq`]) and through the [`ByIdentity`]
//! wrapper for hashed containers, so `PartialEq` on application types stays
//! free for whatever structural meaning they need.

use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use serde::{Deserialize, Serialize};

/// Entity marker + identity-based comparison.
pub trait Entity {
    /// Strongly-typed entity identifier.
    ///
    /// `Default` is the "unassigned" sentinel: an entity whose id equals
    /// `Id::default()` is transient and only ever equal to itself.
    type Id: Clone + Eq + Hash + Debug + Default;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the entity still carries the default (unassigned) identifier.
    fn is_transient(&self) -> bool {
        *self.id() == Self::Id::default()
    }

    /// Identity-based equality.
    ///
    /// - the same instance is always equal to itself;
    /// - a transient entity is never equal to any other instance, including
    ///   other transient entities;
    /// - otherwise two entities are equal iff their identifiers are equal.
    ///
    /// Comparing entities of different concrete types does not type-check,
    /// which keeps identifiers of unrelated entity families apart.
    fn same_identity(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        if self.is_transient() {
            return false;
        }
        self.id() == other.id()
    }

    /// Feed the identifier (and nothing else) into `state`.
    ///
    /// Stable for the entity's lifetime as long as the id is not reassigned
    /// after the entity has been placed in a hashed container.
    fn hash_identity<H: Hasher>(&self, state: &mut H)
    where
        Self: Sized,
    {
        self.id().hash(state);
    }
}

/// Equality over possibly-absent entities.
///
/// Two absent entities are equal, one absent and one present are not, and
/// two present entities defer to [`Entity::same_identity`].
pub fn identity_eq<E: Entity>(a: Option<&E>, b: Option<&E>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_identity(b),
        _ => false,
    }
}

/// Composable identity holder.
///
/// Application entities embed an `EntityBase` and delegate [`Entity`] to it,
/// usually through [`impl_entity!`](crate::impl_entity).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityBase<Id> {
    id: Id,
}

impl<Id> EntityBase<Id> {
    /// Identity with an explicit identifier (e.g. rehydrated from storage).
    pub fn new(id: Id) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Assign the identifier of a transient entity (e.g. once storage has
    /// generated a key).
    ///
    /// Must not be called once the entity has been hashed or compared, or
    /// hash/equality consistency is lost.
    pub fn assign_id(&mut self, id: Id) {
        self.id = id;
    }
}

impl<Id: Default> EntityBase<Id> {
    /// Identity carrying the default (unassigned) identifier.
    pub fn transient() -> Self {
        Self { id: Id::default() }
    }
}

impl<Id> Entity for EntityBase<Id>
where
    Id: Clone + Eq + Hash + Debug + Default,
{
    type Id = Id;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wrapper that gives an entity `Eq + Hash` by identity.
///
/// Use it as the key (or element) type of `HashMap`/`HashSet` when entities
/// should be deduplicated by id regardless of their attribute state.
#[derive(Debug, Clone)]
pub struct ByIdentity<E>(E);

impl<E: Entity> ByIdentity<E> {
    pub fn new(entity: E) -> Self {
        Self(entity)
    }

    pub fn get(&self) -> &E {
        &self.0
    }

    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E> Deref for ByIdentity<E> {
    type Target = E;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: Entity> PartialEq for ByIdentity<E> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_identity(&other.0)
    }
}

impl<E: Entity> Eq for ByIdentity<E> {}

impl<E: Entity> Hash for ByIdentity<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_identity(state);
    }
}

impl<E: Entity> From<E> for ByIdentity<E> {
    fn from(entity: E) -> Self {
        Self(entity)
    }
}

/// Implement [`Entity`] for a type that embeds an [`EntityBase`].
///
/// ```ignore
/// struct OrderLine {
///     base: EntityBase<u32>,
///     sku: String,
/// }
///
/// impl_entity!(OrderLine, base, u32);
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($t:ty, $field:ident, $id:ty) => {
        impl $crate::Entity for $t {
            type Id = $id;

            fn id(&self) -> &Self::Id {
                $crate::Entity::id(&self.$field)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    #[derive(Debug, Clone)]
    struct Line {
        base: EntityBase<u32>,
        sku: String,
    }

    impl_entity!(Line, base, u32);

    fn line(id: u32, sku: &str) -> Line {
        Line {
            base: EntityBase::new(id),
            sku: sku.to_string(),
        }
    }

    fn hash_of<E: Entity>(entity: &E) -> u64 {
        let mut hasher = DefaultHasher::new();
        entity.hash_identity(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_ids_mean_equal_entities_regardless_of_state() {
        let a = line(7, "SKU-001");
        let b = line(7, "SKU-999");

        assert!(a.same_identity(&b));
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_ids_are_not_equal() {
        assert!(!line(1, "SKU-001").same_identity(&line(2, "SKU-001")));
    }

    #[test]
    fn transient_entity_equals_only_itself() {
        let a = Line {
            base: EntityBase::transient(),
            sku: "SKU-001".to_string(),
        };
        let b = a.clone();

        assert!(a.is_transient());
        assert!(a.same_identity(&a));
        assert!(!a.same_identity(&b));
        assert!(!b.same_identity(&a));
    }

    #[test]
    fn persisted_entity_never_equals_transient_one() {
        let persisted = line(3, "SKU-001");
        let transient = line(0, "SKU-001");

        assert!(!persisted.same_identity(&transient));
        assert!(!transient.same_identity(&persisted));
    }

    #[test]
    fn assign_id_leaves_transient_state() {
        let mut base = EntityBase::<u32>::transient();
        assert!(base.is_transient());

        base.assign_id(42);
        assert!(!base.is_transient());
        assert_eq!(*base.id(), 42);
    }

    #[test]
    fn identity_eq_handles_absent_entities() {
        let a = line(1, "SKU-001");
        let b = line(1, "SKU-002");

        assert!(identity_eq::<Line>(None, None));
        assert!(!identity_eq(Some(&a), None));
        assert!(!identity_eq(None, Some(&a)));
        assert!(identity_eq(Some(&a), Some(&b)));
    }

    #[test]
    fn by_identity_deduplicates_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(ByIdentity::new(line(1, "SKU-001")));
        set.insert(ByIdentity::new(line(1, "SKU-002")));
        set.insert(ByIdentity::new(line(2, "SKU-001")));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn by_identity_keeps_transient_entities_apart() {
        let mut set = HashSet::new();
        set.insert(ByIdentity::new(line(0, "SKU-001")));
        set.insert(ByIdentity::new(line(0, "SKU-001")));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn by_identity_derefs_to_entity() {
        let wrapped = ByIdentity::from(line(5, "SKU-005"));
        assert_eq!(wrapped.sku, "SKU-005");
        assert_eq!(*wrapped.get().id(), 5);
        assert_eq!(wrapped.into_inner().sku, "SKU-005");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn same_identity_is_reflexive(id in 1u32..u32::MAX) {
            let a = line(id, "a");
            let copy = line(id, "b");
            prop_assert!(a.same_identity(&a));
            prop_assert!(a.same_identity(&copy));
        }

        #[test]
        fn same_identity_is_symmetric(x in 0u32..8, y in 0u32..8) {
            let a = line(x, "a");
            let b = line(y, "b");
            prop_assert_eq!(a.same_identity(&b), b.same_identity(&a));
        }

        #[test]
        fn same_identity_is_transitive(x in 0u32..4, y in 0u32..4, z in 0u32..4) {
            let a = line(x, "a");
            let b = line(y, "b");
            let c = line(z, "c");
            if a.same_identity(&b) && b.same_identity(&c) {
                prop_assert!(a.same_identity(&c));
            }
        }

        #[test]
        fn equal_entities_hash_equally(x in 0u32..8, y in 0u32..8) {
            let a = line(x, "a");
            let b = line(y, "b");
            if a.same_identity(&b) {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }
        }
    }
}
