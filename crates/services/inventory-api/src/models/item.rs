use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Collection;

/// A row of the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub count: i64,
}

/// An item together with the collections it belongs to, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub item: Item,
    pub collections: Vec<Collection>,
}

impl ItemDetail {
    pub fn collection_ids(&self) -> Vec<i64> {
        self.collections.iter().map(|c| c.id).collect()
    }

    pub fn is_member_of(&self, collection_id: i64) -> bool {
        self.collections.iter().any(|c| c.id == collection_id)
    }
}
