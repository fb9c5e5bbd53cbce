use serde::{Deserialize, Serialize};
use serde_json::json;

use staticentity_core::{CatalogResult, DataSet, StaticEntity, ValueObject};

/// Identifier of an [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusCode {
    Draft,
    Confirmed,
    Shipped,
    Cancelled,
}

/// Order lifecycle catalog keyed by a closed set of codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    id: OrderStatusCode,
    name: String,
    /// No further transitions once reached.
    terminal: bool,
}

impl OrderStatus {
    pub fn code(&self) -> OrderStatusCode {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl ValueObject for OrderStatus {}

impl StaticEntity for OrderStatus {
    type Id = OrderStatusCode;

    fn data_set() -> CatalogResult<DataSet<OrderStatusCode>> {
        use OrderStatusCode::*;

        Ok(DataSet::new()
            .entry(Draft, json!({ "name": "Draft", "terminal": false }))
            .entry(Confirmed, json!({ "name": "Confirmed", "terminal": false }))
            .entry(Shipped, json!({ "name": "Shipped", "terminal": true }))
            .entry(Cancelled, json!({ "name": "Cancelled", "terminal": true })))
    }

    fn id(&self) -> &OrderStatusCode {
        &self.id
    }

    fn catalog_name() -> &'static str {
        "OrderStatus"
    }
}
