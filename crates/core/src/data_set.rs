//! In-code source of a catalog's records.

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::id::EntityId;

/// One catalog entry before hydration.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<I> {
    pub id: I,
    /// Attributes other than the id. Expected to be a JSON object.
    pub attributes: Value,
}

/// Ordered list of records; record order is the catalog's canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet<I> {
    records: Vec<Record<I>>,
}

impl<I> DataSet<I> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn entry(mut self, id: I, attributes: Value) -> Self {
        self.records.push(Record { id, attributes });
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record<I>> {
        self.records.iter()
    }
}

impl<I: EntityId> DataSet<I> {
    /// Parse a JSON array of objects, each carrying its identifier under `"id"`.
    ///
    /// ```ignore
    /// let set = DataSet::<String>::from_json_str("Currency", r#"[
    ///     { "id": "EUR", "name": "Euro" },
    ///     { "id": "USD", "name": "US Dollar" }
    /// ]"#)?;
    /// ```
    pub fn from_json_str(catalog: &'static str, json: &str) -> CatalogResult<Self> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| CatalogError::data_set(catalog, e.to_string()))?;

        let Value::Array(items) = document else {
            return Err(CatalogError::data_set(
                catalog,
                "expected a JSON array of records",
            ));
        };

        let mut set = Self::new();
        for (position, item) in items.into_iter().enumerate() {
            let Value::Object(mut attributes) = item else {
                return Err(CatalogError::data_set(
                    catalog,
                    format!("record #{position} is not an object"),
                ));
            };
            let raw_id = attributes.remove("id").ok_or_else(|| {
                CatalogError::data_set(catalog, format!("record #{position} has no `id`"))
            })?;
            let id = serde_json::from_value::<I>(raw_id).map_err(|e| {
                CatalogError::data_set(catalog, format!("record #{position}: bad id: {e}"))
            })?;
            set = set.entry(id, Value::Object(attributes));
        }

        Ok(set)
    }
}

impl<I> Default for DataSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> IntoIterator for DataSet<I> {
    type Item = Record<I>;
    type IntoIter = std::vec::IntoIter<Record<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
