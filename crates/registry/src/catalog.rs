//! Class-level catalog API: `Color::get(&1)`, `Color::get_all()`, ...

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use staticentity_core::{CatalogResult, IdOrEntity, StaticEntity};

use crate::manager::EntityManager;
use crate::registry::ManagerRegistry;

/// Lookups on a catalog type, served by its manager in the global registry.
///
/// Blanket-implemented for every [`StaticEntity`]; bring the trait into scope
/// and call the operations on the concrete type. Use
/// [`ManagerRegistry::manager`] directly to work against another registry.
pub trait Catalog: StaticEntity {
    /// Manager for this catalog, built on first use.
    fn manager() -> CatalogResult<Arc<EntityManager<Self>>> {
        ManagerRegistry::global().manager::<Self>()
    }

    fn get(id: &Self::Id) -> CatalogResult<Self> {
        Self::manager()?.get(id).cloned()
    }

    fn has_id(id: &Self::Id) -> CatalogResult<bool> {
        Ok(Self::manager()?.has_id(id))
    }

    fn get_all() -> CatalogResult<Vec<Self>> {
        Ok(Self::manager()?.get_all().to_vec())
    }

    fn get_ids() -> CatalogResult<Vec<Self::Id>> {
        Ok(Self::manager()?.get_ids())
    }

    /// Id → value of the registry's default attribute (`"name"` unless configured).
    fn get_associative() -> CatalogResult<IndexMap<Self::Id, Value>> {
        ManagerRegistry::global().get_associative::<Self>()
    }

    fn get_associative_by(value_key: &str) -> CatalogResult<IndexMap<Self::Id, Value>> {
        Self::manager()?.get_associative(value_key)
    }

    /// Entity → its id; raw id → itself once known to exist.
    fn to_id<'a>(id_or_entity: impl Into<IdOrEntity<'a, Self>>) -> CatalogResult<Self::Id> {
        Self::manager()?.convert_to_id(id_or_entity.into())
    }

    /// `to_id` for a raw identifier: returns it unchanged once known to exist.
    fn to_id_of(id: Self::Id) -> CatalogResult<Self::Id> {
        Self::to_id(IdOrEntity::Id(id))
    }
}

impl<E: StaticEntity> Catalog for E {}
