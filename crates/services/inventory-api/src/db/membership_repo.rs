use std::collections::BTreeSet;

use sqlx::{SqliteConnection, SqlitePool};

use super::collection_repo::fetch_collection;
use super::item_repo::{fetch_item, load_detail};
use super::WRITE_TRANSACTION;
use crate::error::{InventoryError, Result};
use crate::models::ItemDetail;

/// Maintains the `item_collections` join table.
///
/// Each call runs in one transaction: the item and every collection id are
/// resolved first, and only then are edges written. Any missing id returns
/// before the first write and the dropped transaction rolls back.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn link(&self, item_id: i64, collection_ids: &BTreeSet<i64>) -> Result<ItemDetail> {
        let mut tx = self.pool.begin_with(WRITE_TRANSACTION).await?;

        resolve_all(&mut tx, item_id, collection_ids).await?;

        for &collection_id in collection_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO item_collections (item_id, collection_id) VALUES (?, ?)",
            )
            .bind(item_id)
            .bind(collection_id)
            .execute(&mut *tx)
            .await?;
        }

        let detail = load_detail(&mut tx, item_id)
            .await?
            .ok_or_else(|| InventoryError::item_not_found(item_id))?;

        tx.commit().await?;
        Ok(detail)
    }

    #[tracing::instrument(skip(self))]
    pub async fn unlink(&self, item_id: i64, collection_ids: &BTreeSet<i64>) -> Result<ItemDetail> {
        let mut tx = self.pool.begin_with(WRITE_TRANSACTION).await?;

        resolve_all(&mut tx, item_id, collection_ids).await?;

        for &collection_id in collection_ids {
            sqlx::query("DELETE FROM item_collections WHERE item_id = ? AND collection_id = ?")
                .bind(item_id)
                .bind(collection_id)
                .execute(&mut *tx)
                .await?;
        }

        let detail = load_detail(&mut tx, item_id)
            .await?
            .ok_or_else(|| InventoryError::item_not_found(item_id))?;

        tx.commit().await?;
        Ok(detail)
    }
}

async fn resolve_all(
    conn: &mut SqliteConnection,
    item_id: i64,
    collection_ids: &BTreeSet<i64>,
) -> Result<()> {
    if fetch_item(conn, item_id).await?.is_none() {
        return Err(InventoryError::item_not_found(item_id));
    }

    for &collection_id in collection_ids {
        if fetch_collection(conn, collection_id).await?.is_none() {
            return Err(InventoryError::collection_not_found(collection_id));
        }
    }

    Ok(())
}
