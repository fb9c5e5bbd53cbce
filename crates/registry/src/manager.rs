//! Per-catalog entity manager.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use staticentity_core::{CatalogError, CatalogResult, IdOrEntity, StaticEntity};

/// Owns the hydrated entities of one catalog type.
///
/// - Built once from `E::data_set()`
/// - Read-only afterwards (safe to share behind an `Arc`)
/// - Entity order is the data-set order, stable for the manager's lifetime
#[derive(Debug)]
pub struct EntityManager<E: StaticEntity> {
    entities: Vec<E>,
    index: HashMap<E::Id, usize>,
}

impl<E: StaticEntity> EntityManager<E> {
    /// Build the manager from the catalog's data set.
    pub fn load() -> CatalogResult<Self> {
        let catalog = E::catalog_name();
        let data_set = E::data_set()?;

        let mut entities = Vec::with_capacity(data_set.len());
        let mut index = HashMap::with_capacity(data_set.len());

        for record in data_set {
            if index.contains_key(&record.id) {
                return Err(CatalogError::duplicate_id(catalog, &record.id));
            }

            let entity = hydrate::<E>(record.id.clone(), record.attributes)?;
            if entity.id() != &record.id {
                return Err(CatalogError::hydration(
                    catalog,
                    &record.id,
                    format!("entity reports id {:?}", entity.id()),
                ));
            }

            index.insert(record.id, entities.len());
            entities.push(entity);
        }

        tracing::debug!(catalog, entities = entities.len(), "catalog manager built");

        Ok(Self { entities, index })
    }

    pub fn catalog_name(&self) -> &'static str {
        E::catalog_name()
    }

    /// Entity with this identifier.
    pub fn get(&self, id: &E::Id) -> CatalogResult<&E> {
        self.index
            .get(id)
            .map(|&position| &self.entities[position])
            .ok_or_else(|| CatalogError::not_found(E::catalog_name(), id))
    }

    pub fn has_id(&self, id: &E::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Every entity, in canonical order.
    pub fn get_all(&self) -> &[E] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entities.iter()
    }

    /// Every identifier, in the same order as [`EntityManager::get_all`].
    pub fn get_ids(&self) -> Vec<E::Id> {
        self.entities.iter().map(|e| e.id().clone()).collect()
    }

    /// Map each id to the serialized value of attribute `value_key`.
    pub fn get_associative(&self, value_key: &str) -> CatalogResult<IndexMap<E::Id, Value>> {
        self.entities
            .iter()
            .map(|entity| {
                let value = attribute(entity, value_key)?;
                Ok((entity.id().clone(), value))
            })
            .collect()
    }

    /// Like [`EntityManager::get_associative`], with values deserialized into `V`.
    pub fn get_associative_as<V>(&self, value_key: &str) -> CatalogResult<IndexMap<E::Id, V>>
    where
        V: DeserializeOwned,
    {
        self.get_associative(value_key)?
            .into_iter()
            .map(|(id, value)| {
                let typed = serde_json::from_value(value).map_err(|e| {
                    CatalogError::hydration(
                        E::catalog_name(),
                        &id,
                        format!("attribute `{value_key}`: {e}"),
                    )
                })?;
                Ok((id, typed))
            })
            .collect()
    }

    /// Entity → its id; raw id → itself once known to exist.
    pub fn convert_to_id(&self, id_or_entity: IdOrEntity<'_, E>) -> CatalogResult<E::Id> {
        match id_or_entity {
            IdOrEntity::Entity(entity) => Ok(entity.id().clone()),
            IdOrEntity::Id(id) if self.has_id(&id) => Ok(id),
            IdOrEntity::Id(id) => Err(CatalogError::not_found(E::catalog_name(), &id)),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn hydrate<E: StaticEntity>(id: E::Id, attributes: Value) -> CatalogResult<E> {
    let catalog = E::catalog_name();

    let Value::Object(mut fields) = attributes else {
        return Err(CatalogError::hydration(
            catalog,
            &id,
            "attributes must be a JSON object",
        ));
    };

    let id_value =
        serde_json::to_value(&id).map_err(|e| CatalogError::hydration(catalog, &id, e.to_string()))?;
    match fields.get("id") {
        Some(existing) if existing != &id_value => {
            return Err(CatalogError::hydration(
                catalog,
                &id,
                format!("attributes carry conflicting id {existing}"),
            ));
        }
        _ => {
            fields.insert("id".to_string(), id_value);
        }
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| CatalogError::hydration(catalog, &id, e.to_string()))
}

fn attribute<E: StaticEntity>(entity: &E, key: &str) -> CatalogResult<Value> {
    let catalog = E::catalog_name();

    let serialized = serde_json::to_value(entity)
        .map_err(|e| CatalogError::hydration(catalog, entity.id(), e.to_string()))?;

    match serialized {
        Value::Object(mut fields) => fields
            .remove(key)
            .ok_or_else(|| CatalogError::attribute_not_found(catalog, key)),
        _ => Err(CatalogError::attribute_not_found(catalog, key)),
    }
}
