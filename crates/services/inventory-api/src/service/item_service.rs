use tracing::info;

use super::require_name;
use crate::db::ItemRepository;
use crate::error::{InventoryError, Result};
use crate::models::ItemDetail;

#[derive(Debug, Clone)]
pub struct ItemService {
    repository: ItemRepository,
}

impl ItemService {
    pub fn new(repository: ItemRepository) -> Self {
        Self { repository }
    }

    /// Creates an item with a count of zero. Item names need not be unique.
    pub async fn create_item(&self, name: &str) -> Result<ItemDetail> {
        let name = require_name(name)?;
        let detail = self.repository.create(name).await?;

        info!(item_id = detail.item.id, name = %detail.item.name, "Item created");
        Ok(detail)
    }

    pub async fn get_item(&self, id: i64) -> Result<ItemDetail> {
        self.repository.get(id).await
    }

    pub async fn list_items(&self) -> Result<Vec<ItemDetail>> {
        self.repository.list().await
    }

    pub async fn edit_item_name(&self, id: i64, name: Option<&str>) -> Result<ItemDetail> {
        self.edit_item(id, name, None).await
    }

    pub async fn edit_item_count(&self, id: i64, count: Option<i64>) -> Result<ItemDetail> {
        self.edit_item(id, None, count).await
    }

    /// Applies both optional edits atomically. `None` leaves a field as is.
    pub async fn edit_item(
        &self,
        id: i64,
        name: Option<&str>,
        count: Option<i64>,
    ) -> Result<ItemDetail> {
        let name = name.map(require_name).transpose()?;

        if matches!(count, Some(c) if c < 0) {
            return Err(InventoryError::validation(
                "count",
                "must be greater than or equal to 0",
            ));
        }

        let detail = self.repository.update(id, name, count).await?;

        info!(
            item_id = id,
            name = %detail.item.name,
            count = detail.item.count,
            "Item edited"
        );
        Ok(detail)
    }

    pub async fn delete_item(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;

        info!(item_id = id, "Item deleted");
        Ok(())
    }
}
