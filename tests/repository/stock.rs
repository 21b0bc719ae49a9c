use serde::{Deserialize, Serialize};
use typed_repo::{Entity, Identity, Quantity};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Entity)]
pub struct StockItem {
    pub id: Identity,
    pub name: String,
    #[entity(quantity)]
    pub qty: Quantity,
}

impl StockItem {
    pub fn new(id: Identity, qty: Quantity) -> Self {
        StockItem {
            id,
            name: format!("stock-{}", id),
            qty,
        }
    }
}
