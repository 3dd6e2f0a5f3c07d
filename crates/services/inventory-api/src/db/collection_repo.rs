use sqlx::{SqliteConnection, SqlitePool};

use super::WRITE_TRANSACTION;
use crate::error::{InventoryError, Result};
use crate::models::{Collection, CollectionDetail, Item};

#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: SqlitePool,
}

impl CollectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<CollectionDetail> {
        let collection = sqlx::query_as::<_, Collection>(
            r#"
            INSERT INTO collections (name)
            VALUES (?)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return InventoryError::already_exists("collection", name);
                }
            }
            InventoryError::from(e)
        })?;

        Ok(CollectionDetail {
            collection,
            items: Vec::new(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<CollectionDetail> {
        let mut conn = self.pool.acquire().await?;

        load_detail(&mut conn, id)
            .await?
            .ok_or_else(|| InventoryError::collection_not_found(id))
    }

    /// Collections without their members, ordered by id.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Collection>> {
        let collections =
            sqlx::query_as::<_, Collection>("SELECT id, name FROM collections ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(collections)
    }

    /// Removes the collection from every member item, then removes it.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin_with(WRITE_TRANSACTION).await?;

        sqlx::query("DELETE FROM item_collections WHERE collection_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM collections WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(InventoryError::collection_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}

pub(crate) async fn fetch_collection(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Collection>> {
    let collection =
        sqlx::query_as::<_, Collection>("SELECT id, name FROM collections WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(collection)
}

pub(crate) async fn load_detail(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<CollectionDetail>> {
    let Some(collection) = fetch_collection(conn, id).await? else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT i.id, i.name, i.count
        FROM items i
        JOIN item_collections ic ON ic.item_id = i.id
        WHERE ic.collection_id = ?
        ORDER BY i.id
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(Some(CollectionDetail { collection, items }))
}
