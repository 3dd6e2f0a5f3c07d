use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Item;

/// A row of the `collections` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Collection {
    pub id: i64,
    pub name: String,
}

/// A collection together with its member items, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDetail {
    pub collection: Collection,
    pub items: Vec<Item>,
}

impl CollectionDetail {
    pub fn item_ids(&self) -> Vec<i64> {
        self.items.iter().map(|i| i.id).collect()
    }

    pub fn contains(&self, item_id: i64) -> bool {
        self.items.iter().any(|i| i.id == item_id)
    }
}
