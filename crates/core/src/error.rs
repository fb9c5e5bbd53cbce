//! Catalog error model.

use thiserror::Error;

/// Result type used across catalog lookups and manager construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Identifiers are rendered with `Debug` so that every id type can be reported
/// without requiring `Display`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A non-catalog base type was used where a concrete catalog is required.
    #[error("cannot call catalog operations directly on base type `{catalog}`")]
    DirectInvocation { catalog: &'static str },

    /// No entity with this identifier exists in the catalog.
    #[error("{catalog}: no entity with id {id}")]
    NotFound { catalog: &'static str, id: String },

    /// The requested attribute is not a readable field of the catalog's entities.
    #[error("{catalog}: entities have no attribute `{attribute}`")]
    AttributeNotFound {
        catalog: &'static str,
        attribute: String,
    },

    /// The data set lists the same identifier twice.
    #[error("{catalog}: duplicate id {id} in data set")]
    DuplicateId { catalog: &'static str, id: String },

    /// A data-set record could not be turned into an entity.
    #[error("{catalog}: cannot hydrate entity {id}: {message}")]
    Hydration {
        catalog: &'static str,
        id: String,
        message: String,
    },

    /// The data set itself could not be produced or parsed.
    #[error("{catalog}: invalid data set: {message}")]
    DataSet {
        catalog: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn direct_invocation(catalog: &'static str) -> Self {
        Self::DirectInvocation { catalog }
    }

    pub fn not_found(catalog: &'static str, id: &impl core::fmt::Debug) -> Self {
        Self::NotFound {
            catalog,
            id: format!("{id:?}"),
        }
    }

    pub fn attribute_not_found(catalog: &'static str, attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            catalog,
            attribute: attribute.into(),
        }
    }

    pub fn duplicate_id(catalog: &'static str, id: &impl core::fmt::Debug) -> Self {
        Self::DuplicateId {
            catalog,
            id: format!("{id:?}"),
        }
    }

    pub fn hydration(
        catalog: &'static str,
        id: &impl core::fmt::Debug,
        message: impl Into<String>,
    ) -> Self {
        Self::Hydration {
            catalog,
            id: format!("{id:?}"),
            message: message.into(),
        }
    }

    pub fn data_set(catalog: &'static str, message: impl Into<String>) -> Self {
        Self::DataSet {
            catalog,
            message: message.into(),
        }
    }

    /// Whether this error means "the identifier is unknown".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
