use serde::{Deserialize, Serialize};

use staticentity_core::{CatalogResult, DataSet, StaticEntity, ValueObject};

const CURRENCIES_JSON: &str = include_str!("../data/currencies.json");

/// ISO 4217 currency catalog, keyed by alphabetic code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    id: String,
    name: String,
    symbol: String,
    /// Digits after the decimal separator (e.g. 2 for cents).
    minor_units: u8,
}

impl Currency {
    pub fn code(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn minor_units(&self) -> u8 {
        self.minor_units
    }
}

impl ValueObject for Currency {}

impl StaticEntity for Currency {
    type Id = String;

    fn data_set() -> CatalogResult<DataSet<String>> {
        DataSet::from_json_str(Self::catalog_name(), CURRENCIES_JSON)
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn catalog_name() -> &'static str {
        "Currency"
    }
}
