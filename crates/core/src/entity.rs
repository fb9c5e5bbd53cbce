//! Static entity trait: a type whose instances form a fixed, enumerable catalog.

use core::any::Any;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::data_set::DataSet;
use crate::error::CatalogResult;
use crate::id::EntityId;
use crate::value_object::ValueObject;

/// A catalog type: every value of `Self` that exists is listed by [`StaticEntity::data_set`].
///
/// Instances are produced by the catalog's manager only. The manager takes each
/// record of the data set, inserts the record's identifier under the `"id"`
/// attribute and deserializes the result, so implementors derive `Deserialize`
/// and keep an `id` field.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Color {
///     id: u32,
///     name: String,
/// }
///
/// impl ValueObject for Color {}
///
/// impl StaticEntity for Color {
///     type Id = u32;
///
///     fn data_set() -> CatalogResult<DataSet<u32>> {
///         Ok(DataSet::new()
///             .entry(1, json!({ "name": "Red" }))
///             .entry(2, json!({ "name": "Green" })))
///     }
///
///     fn id(&self) -> &u32 {
///         &self.id
///     }
/// }
/// ```
pub trait StaticEntity: ValueObject + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier type, unique within the catalog.
    type Id: EntityId;

    /// Marks a shared base type that is not itself a catalog.
    ///
    /// Resolving a manager for such a type fails with
    /// [`CatalogError::DirectInvocation`](crate::CatalogError::DirectInvocation).
    const ABSTRACT: bool = false;

    /// Records making up the catalog, in canonical order.
    ///
    /// Called once per manager construction.
    fn data_set() -> CatalogResult<DataSet<Self::Id>>;

    /// Returns the identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Human-readable catalog name used in errors and logs.
    fn catalog_name() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Whether `id` is this instance's identifier.
    fn is(&self, id: &Self::Id) -> bool {
        self.id() == id
    }

    /// Strict comparison against a value of unknown type.
    ///
    /// Values of any type other than `Self::Id` never match, even when they
    /// would print the same (`1u32` vs `"1"`).
    fn is_value(&self, value: &dyn Any) -> bool {
        value
            .downcast_ref::<Self::Id>()
            .is_some_and(|id| self.is(id))
    }
}
