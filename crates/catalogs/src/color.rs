use serde::{Deserialize, Serialize};
use serde_json::json;

use staticentity_core::{CatalogResult, DataSet, StaticEntity, ValueObject};

/// Color catalog (in-code data set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    id: u32,
    name: String,
    hex: String,
}

impl Color {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `#rrggbb` form.
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

impl ValueObject for Color {}

impl StaticEntity for Color {
    type Id = u32;

    fn data_set() -> CatalogResult<DataSet<u32>> {
        Ok(DataSet::new()
            .entry(1, json!({ "name": "Red", "hex": "#ff0000" }))
            .entry(2, json!({ "name": "Green", "hex": "#00ff00" }))
            .entry(3, json!({ "name": "Blue", "hex": "#0000ff" })))
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    fn catalog_name() -> &'static str {
        "Color"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staticentity_core::{CatalogError, IdOrEntity};
    use staticentity_registry::Catalog;

    #[test]
    fn get_returns_the_entity_for_each_id() {
        let red = Color::get(&1).unwrap();
        assert_eq!(red.id(), &1);
        assert_eq!(red.name(), "Red");
        assert_eq!(red.hex(), "#ff0000");
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert!(!Color::has_id(&4).unwrap());
        assert!(Color::get(&4).unwrap_err().is_not_found());
        assert!(Color::to_id(IdOrEntity::id(4)).unwrap_err().is_not_found());
    }

    #[test]
    fn associative_by_name_and_hex() {
        let names = Color::get_associative_by("name").unwrap();
        assert_eq!(names.keys().copied().collect::<Vec<_>>(), Color::get_ids().unwrap());
        assert_eq!(names[&2], json!("Green"));

        let hexes = Color::get_associative_by("hex").unwrap();
        assert_eq!(hexes[&3], json!("#0000ff"));

        let err = Color::get_associative_by("alpha").unwrap_err();
        assert_eq!(err, CatalogError::attribute_not_found("Color", "alpha"));
    }

    #[test]
    fn to_id_of_instance_is_its_id() {
        for color in Color::get_all().unwrap() {
            assert_eq!(Color::to_id(&color).unwrap(), *color.id());
            assert!(color.is(color.id()));
        }
    }
}
