use std::collections::HashMap;

use sqlx::{SqliteConnection, SqlitePool};

use super::WRITE_TRANSACTION;
use crate::error::{InventoryError, Result};
use crate::models::{Collection, Item, ItemDetail};

#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<ItemDetail> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name)
            VALUES (?)
            RETURNING id, name, count
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(ItemDetail {
            item,
            collections: Vec::new(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<ItemDetail> {
        let mut conn = self.pool.acquire().await?;

        load_detail(&mut conn, id)
            .await?
            .ok_or_else(|| InventoryError::item_not_found(id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ItemDetail>> {
        let mut tx = self.pool.begin().await?;

        let items = sqlx::query_as::<_, Item>("SELECT id, name, count FROM items ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        let edges = sqlx::query_as::<_, (i64, i64, String)>(
            r#"
            SELECT ic.item_id, c.id, c.name
            FROM item_collections ic
            JOIN collections c ON c.id = ic.collection_id
            ORDER BY ic.item_id, c.id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut by_item: HashMap<i64, Vec<Collection>> = HashMap::new();
        for (item_id, id, name) in edges {
            by_item.entry(item_id).or_default().push(Collection { id, name });
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let collections = by_item.remove(&item.id).unwrap_or_default();
                ItemDetail { item, collections }
            })
            .collect())
    }

    /// Applies whichever of `name` and `count` are present in one statement.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: i64, name: Option<&str>, count: Option<i64>) -> Result<ItemDetail> {
        let mut tx = self.pool.begin_with(WRITE_TRANSACTION).await?;

        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = COALESCE(?, name),
                count = COALESCE(?, count)
            WHERE id = ?
            RETURNING id, name, count
            "#,
        )
        .bind(name)
        .bind(count)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| InventoryError::item_not_found(id))?;

        let detail = load_detail(&mut tx, id)
            .await?
            .ok_or_else(|| InventoryError::item_not_found(id))?;

        tx.commit().await?;
        Ok(detail)
    }

    /// Detaches the item from every collection, then removes it.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin_with(WRITE_TRANSACTION).await?;

        sqlx::query("DELETE FROM item_collections WHERE item_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::item_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}

pub(crate) async fn fetch_item(conn: &mut SqliteConnection, id: i64) -> Result<Option<Item>> {
    let item = sqlx::query_as::<_, Item>("SELECT id, name, count FROM items WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(item)
}

pub(crate) async fn load_detail(conn: &mut SqliteConnection, id: i64) -> Result<Option<ItemDetail>> {
    let Some(item) = fetch_item(conn, id).await? else {
        return Ok(None);
    };

    let collections = sqlx::query_as::<_, Collection>(
        r#"
        SELECT c.id, c.name
        FROM collections c
        JOIN item_collections ic ON ic.collection_id = c.id
        WHERE ic.item_id = ?
        ORDER BY c.id
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(Some(ItemDetail { item, collections }))
}
