//! Catalog identifiers.

use core::fmt::Debug;
use core::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::entity::StaticEntity;

/// Bounds every catalog identifier satisfies.
///
/// Blanket-implemented; integers, strings and small `Copy` enums all qualify.
pub trait EntityId:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> EntityId for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// Argument of `to_id`: either a raw identifier still to be validated, or an
/// entity whose identifier is taken as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum IdOrEntity<'a, E: StaticEntity> {
    Id(E::Id),
    Entity(&'a E),
}

impl<'a, E: StaticEntity> IdOrEntity<'a, E> {
    pub fn id(id: E::Id) -> Self {
        Self::Id(id)
    }

    pub fn entity(entity: &'a E) -> Self {
        Self::Entity(entity)
    }
}

impl<'a, E: StaticEntity> From<&'a E> for IdOrEntity<'a, E> {
    fn from(entity: &'a E) -> Self {
        Self::Entity(entity)
    }
}
